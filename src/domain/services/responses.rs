#[cfg(test)]
#[path = "responses_test.rs"]
mod tests;

use crate::domain::models::IntentCategory;
use crate::domain::models::Language;

pub fn category_text(category: IntentCategory, language: Language) -> &'static str {
    match (category, language) {
        (IntentCategory::Disease, Language::English) => {
            return "I can help identify crop diseases through image analysis or symptom quiz. Upload a leaf photo or describe what you see on your plants.";
        }
        (IntentCategory::Disease, Language::Hindi) => {
            return "मैं तस्वीर विश्लेषण या लक्षण प्रश्नोत्तरी के माध्यम से फसल रोगों की पहचान में मदद कर सकता हूं। पत्ते की फोटो अपलोड करें या बताएं कि आप अपने पौधों पर क्या देखते हैं।";
        }
        (IntentCategory::Disease, Language::Marathi) => {
            return "मी प्रतिमा विश्लेषण किंवा लक्षण प्रश्नमंजुषेद्वारे पीक रोगांची ओळख करण्यात मदत करू शकतो. पानाचा फोटो अपलोड करा किंवा तुमच्या झाडांवर काय दिसते ते सांगा.";
        }
        (IntentCategory::Fertilizer, Language::English) => {
            return "For healthy crop growth, I recommend balanced NPK fertilizers. Organic options include compost and vermicompost. Tell me your crop type for specific recommendations.";
        }
        (IntentCategory::Fertilizer, Language::Hindi) => {
            return "स्वस्थ फसल वृद्धि के लिए, मैं संतुलित NPK उर्वरकों की सिफारिश करता हूं। जैविक विकल्पों में खाद और वर्मीकंपोस्ट शामिल हैं। विशिष्ट सिफारिशों के लिए मुझे अपनी फसल का प्रकार बताएं।";
        }
        (IntentCategory::Fertilizer, Language::Marathi) => {
            return "निरोगी पीक वाढीसाठी, मी संतुलित NPK खतांची शिफारस करतो. सेंद्रिय पर्यायांमध्ये कंपोस्ट आणि व्हर्मीकंपोस्ट समाविष्ट आहे. विशिष्ट शिफारशींसाठी मला तुमच्या पिकाचा प्रकार सांगा.";
        }
        (IntentCategory::Weather, Language::English) => {
            return "Weather significantly affects farming activities. I can provide current conditions, forecasts, and advice on optimal timing for spraying, irrigation, and harvesting.";
        }
        (IntentCategory::Weather, Language::Hindi) => {
            return "मौसम कृषि गतिविधियों को काफी प्रभावित करता है। मैं वर्तमान स्थितियां, पूर्वानुमान, और छिड़काव, सिंचाई और कटाई के लिए इष्टतम समय पर सलाह प्रदान कर सकता हूं।";
        }
        (IntentCategory::Weather, Language::Marathi) => {
            return "हवामान शेती कामांवर लक्षणीय परिणाम करते. मी सध्याची परिस्थिती, अंदाज आणि फवारणी, सिंचन आणि कापणीसाठी योग्य वेळेचा सल्ला देऊ शकतो.";
        }
        (IntentCategory::Crop, Language::English) => {
            return "Choosing the right crop depends on your soil type, climate, water availability, and season. Tell me about your field and I can suggest suitable crops.";
        }
        (IntentCategory::Crop, Language::Hindi) => {
            return "सही फसल का चुनाव आपकी मिट्टी के प्रकार, जलवायु, पानी की उपलब्धता और मौसम पर निर्भर करता है। अपने खेत के बारे में बताएं, मैं उपयुक्त फसलें सुझा सकता हूं।";
        }
        (IntentCategory::Crop, Language::Marathi) => {
            return "योग्य पिकाची निवड तुमच्या मातीचा प्रकार, हवामान, पाण्याची उपलब्धता आणि हंगामावर अवलंबून असते. तुमच्या शेताबद्दल सांगा, मी योग्य पिके सुचवू शकतो.";
        }
        (IntentCategory::General, Language::English) => {
            return "I'm your AI farming assistant! I can help with crop diseases, fertilizer advice, weather guidance, and general farming questions. What would you like to know?";
        }
        (IntentCategory::General, Language::Hindi) => {
            return "मैं आपका AI कृषि सहायक हूं! मैं फसल रोगों, उर्वरक सलाह, मौसम मार्गदर्शन, और सामान्य कृषि प्रश्नों में मदद कर सकता हूं। आप क्या जानना चाहेंगे?";
        }
        (IntentCategory::General, Language::Marathi) => {
            return "मी तुमचा AI शेती सहाय्यक आहे! मी पीक रोग, खत सल्ला, हवामान मार्गदर्शन आणि सामान्य शेती प्रश्नांमध्ये मदत करू शकतो. तुम्हाला काय जाणून घ्यायचे आहे?";
        }
    }
}

pub fn greeting(language: Language) -> &'static str {
    match language {
        Language::English => return "How can I help you?",
        Language::Hindi => return "मैं आपकी कैसे मदद कर सकता हूँ?",
        Language::Marathi => return "मी तुमची कशी मदत करू शकतो?",
    }
}

/// Placeholder shown while a reply is pending.
pub fn typing(language: Language) -> &'static str {
    match language {
        Language::English => return "I am analyzing your query...",
        Language::Hindi => return "मैं आपके प्रश्न का विश्लेषण कर रहा हूँ...",
        Language::Marathi => return "मी तुमचा प्रश्न विश्लेषित करत आहे...",
    }
}

pub fn language_changed(language: Language) -> &'static str {
    match language {
        Language::English => return "Language set to English.",
        Language::Hindi => return "भाषा हिंदी में बदल दी गई है।",
        Language::Marathi => return "भाषा मराठीत बदलली आहे.",
    }
}

pub fn listening(language: Language) -> &'static str {
    match language {
        Language::English => return "Listening...",
        Language::Hindi => return "सुन रहा हूँ...",
        Language::Marathi => return "ऐकत आहे...",
    }
}

pub fn nothing_heard(language: Language) -> &'static str {
    match language {
        Language::English => return "Sorry, I did not catch that. Please try again.",
        Language::Hindi => return "माफ़ कीजिए, मैं समझ नहीं पाया। कृपया फिर से प्रयास करें।",
        Language::Marathi => return "माफ करा, मला ते समजले नाही. कृपया पुन्हा प्रयत्न करा.",
    }
}
