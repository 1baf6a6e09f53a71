#[cfg(test)]
#[path = "advisory_test.rs"]
mod tests;

use crate::domain::models::FarmingAdvice;
use crate::domain::models::Language;
use crate::domain::models::WeatherReport;

#[derive(Clone, Copy)]
enum Irrigation {
    Skip,
    Increase,
    Moderate,
    Normal,
}

#[derive(Clone, Copy)]
enum Spraying {
    AvoidRain,
    HighWind,
    HighHumidity,
    Good,
}

#[derive(Clone, Copy)]
enum FieldWork {
    Indoor,
    ExtremeHeat,
    Excellent,
    Moderate,
}

#[derive(Clone, Copy)]
enum Alert {
    HeatWave,
    HeavyRain,
    StrongWind,
    VeryHumid,
}

fn irrigation(report: &WeatherReport) -> Irrigation {
    if report.is_raining() {
        return Irrigation::Skip;
    }
    if report.main.temp > 35.0 {
        return Irrigation::Increase;
    }
    if report.main.humidity < 40.0 {
        return Irrigation::Moderate;
    }
    return Irrigation::Normal;
}

fn spraying(report: &WeatherReport) -> Spraying {
    if report.is_raining() {
        return Spraying::AvoidRain;
    }
    if report.wind_kmh() > 15.0 {
        return Spraying::HighWind;
    }
    if report.main.humidity > 80.0 {
        return Spraying::HighHumidity;
    }
    return Spraying::Good;
}

fn field_work(report: &WeatherReport) -> FieldWork {
    if report.is_raining() {
        return FieldWork::Indoor;
    }
    if report.main.temp > 40.0 {
        return FieldWork::ExtremeHeat;
    }
    if report.condition().eq_ignore_ascii_case("clear") && report.main.temp < 35.0 {
        return FieldWork::Excellent;
    }
    return FieldWork::Moderate;
}

fn alerts(report: &WeatherReport) -> Vec<Alert> {
    let mut alerts = vec![];
    if report.main.temp > 40.0 {
        alerts.push(Alert::HeatWave);
    }
    if report
        .rain
        .as_ref()
        .map(|rain| return rain.one_hour > 10.0)
        .unwrap_or(false)
    {
        alerts.push(Alert::HeavyRain);
    }
    if report.wind.speed > 10.0 {
        alerts.push(Alert::StrongWind);
    }
    if report.main.humidity > 90.0 {
        alerts.push(Alert::VeryHumid);
    }
    return alerts;
}

fn irrigation_text(advice: Irrigation, language: Language) -> &'static str {
    match (advice, language) {
        (Irrigation::Skip, Language::English) => {
            return "Skip irrigation today. Natural rainfall is sufficient.";
        }
        (Irrigation::Skip, Language::Hindi) => {
            return "आज सिंचाई छोड़ें। प्राकृतिक बारिश पर्याप्त है।";
        }
        (Irrigation::Skip, Language::Marathi) => {
            return "आज पाणी देणे टाळा। नैसर्गिक पाऊस पुरेसा आहे।";
        }
        (Irrigation::Increase, Language::English) => {
            return "Increase irrigation frequency. High temperature detected.";
        }
        (Irrigation::Increase, Language::Hindi) => {
            return "सिंचाई की आवृत्ति बढ़ाएं। उच्च तापमान का पता चला।";
        }
        (Irrigation::Increase, Language::Marathi) => {
            return "पाणी देण्याची वारंवारता वाढवा। उच्च तापमान आढळले।";
        }
        (Irrigation::Moderate, Language::English) => {
            return "Moderate irrigation needed. Low humidity conditions.";
        }
        (Irrigation::Moderate, Language::Hindi) => {
            return "मध्यम सिंचाई की आवश्यकता। कम आर्द्रता की स्थिति।";
        }
        (Irrigation::Moderate, Language::Marathi) => {
            return "मध्यम पाणी देणे आवश्यक। कमी आर्द्रता परिस्थिती।";
        }
        (Irrigation::Normal, Language::English) => {
            return "Normal irrigation schedule. Monitor soil moisture.";
        }
        (Irrigation::Normal, Language::Hindi) => {
            return "सामान्य सिंचाई कार्यक्रम। मिट्टी की नमी की निगरानी करें।";
        }
        (Irrigation::Normal, Language::Marathi) => {
            return "सामान्य पाणी देण्याचे वेळापत्रक। मातीतील ओलावा तपासा।";
        }
    }
}

fn spraying_text(advice: Spraying, language: Language) -> &'static str {
    match (advice, language) {
        (Spraying::AvoidRain, Language::English) => {
            return "Avoid spraying during rain. Wait for dry conditions.";
        }
        (Spraying::AvoidRain, Language::Hindi) => {
            return "बारिश के दौरान छिड़काव से बचें। सूखी स्थिति का इंतजार करें।";
        }
        (Spraying::AvoidRain, Language::Marathi) => {
            return "पावसात फवारणी टाळा। कोरड्या परिस्थितीची प्रतीक्षा करा।";
        }
        (Spraying::HighWind, Language::English) => {
            return "High wind conditions. Postpone spraying to avoid drift.";
        }
        (Spraying::HighWind, Language::Hindi) => {
            return "तेज हवा की स्थिति। बहाव से बचने के लिए छिड़काव स्थगित करें।";
        }
        (Spraying::HighWind, Language::Marathi) => {
            return "जोरदार वारा परिस्थिती। वाहून जाणे टाळण्यासाठी फवारणी पुढे ढकला।";
        }
        (Spraying::HighHumidity, Language::English) => {
            return "High humidity may reduce spray effectiveness.";
        }
        (Spraying::HighHumidity, Language::Hindi) => {
            return "उच्च आर्द्रता छिड़काव की प्रभावशीलता कम कर सकती है।";
        }
        (Spraying::HighHumidity, Language::Marathi) => {
            return "उच्च आर्द्रता फवारणीची प्रभावीता कमी करू शकते।";
        }
        (Spraying::Good, Language::English) => {
            return "Good conditions for spraying. Early morning or evening preferred.";
        }
        (Spraying::Good, Language::Hindi) => {
            return "छिड़काव के लिए अच्छी स्थिति। सुबह या शाम को प्राथमिकता।";
        }
        (Spraying::Good, Language::Marathi) => {
            return "फवारणीसाठी चांगली परिस्थिती। सकाळ किंवा संध्याकाळ प्राधान्य।";
        }
    }
}

fn field_work_text(advice: FieldWork, language: Language) -> &'static str {
    match (advice, language) {
        (FieldWork::Indoor, Language::English) => {
            return "Indoor activities recommended. Avoid field operations.";
        }
        (FieldWork::Indoor, Language::Hindi) => {
            return "इनडोर गतिविधियों की सिफारिश। खेत के काम से बचें।";
        }
        (FieldWork::Indoor, Language::Marathi) => {
            return "घरातील कामांची शिफारस। शेतातील कामे टाळा।";
        }
        (FieldWork::ExtremeHeat, Language::English) => {
            return "Extreme heat. Limit outdoor work to early morning/evening.";
        }
        (FieldWork::ExtremeHeat, Language::Hindi) => {
            return "अत्यधिक गर्मी। बाहरी काम सुबह/शाम तक सीमित करें।";
        }
        (FieldWork::ExtremeHeat, Language::Marathi) => {
            return "अति उष्णता। बाहेरील काम सकाळ/संध्याकाळपुरते मर्यादित करा।";
        }
        (FieldWork::Excellent, Language::English) => {
            return "Excellent conditions for all field activities.";
        }
        (FieldWork::Excellent, Language::Hindi) => {
            return "सभी खेत गतिविधियों के लिए उत्कृष्ट स्थिति।";
        }
        (FieldWork::Excellent, Language::Marathi) => {
            return "सर्व शेती कामांसाठी उत्कृष्ट परिस्थिती।";
        }
        (FieldWork::Moderate, Language::English) => {
            return "Moderate conditions. Plan activities accordingly.";
        }
        (FieldWork::Moderate, Language::Hindi) => {
            return "मध्यम स्थिति। तदनुसार गतिविधियों की योजना बनाएं।";
        }
        (FieldWork::Moderate, Language::Marathi) => {
            return "मध्यम परिस्थिती। त्यानुसार कामांचे नियोजन करा।";
        }
    }
}

fn alert_text(alert: Alert, language: Language) -> &'static str {
    match (alert, language) {
        (Alert::HeatWave, Language::English) => return "Heat wave warning",
        (Alert::HeatWave, Language::Hindi) => return "लू की चेतावनी",
        (Alert::HeatWave, Language::Marathi) => return "उष्णलहरीचा इशारा",
        (Alert::HeavyRain, Language::English) => return "Heavy rain alert",
        (Alert::HeavyRain, Language::Hindi) => return "भारी बारिश अलर्ट",
        (Alert::HeavyRain, Language::Marathi) => return "मुसळधार पावसाचा इशारा",
        (Alert::StrongWind, Language::English) => return "Strong wind advisory",
        (Alert::StrongWind, Language::Hindi) => return "तेज हवा सलाह",
        (Alert::StrongWind, Language::Marathi) => return "जोरदार वाऱ्याचा सल्ला",
        (Alert::VeryHumid, Language::English) => return "Very high humidity",
        (Alert::VeryHumid, Language::Hindi) => return "बहुत उच्च आर्द्रता",
        (Alert::VeryHumid, Language::Marathi) => return "खूप जास्त आर्द्रता",
    }
}

fn no_alerts_text(language: Language) -> &'static str {
    match language {
        Language::English => return "No weather alerts",
        Language::Hindi => return "कोई मौसम अलर्ट नहीं",
        Language::Marathi => return "कोणतेही हवामान इशारे नाहीत",
    }
}

pub fn farming_advice(report: &WeatherReport, language: Language) -> FarmingAdvice {
    let alerts = alerts(report)
        .into_iter()
        .map(|alert| return alert_text(alert, language))
        .collect::<Vec<&str>>();

    let alerts = if alerts.is_empty() {
        no_alerts_text(language).to_string()
    } else {
        alerts.join(", ")
    };

    return FarmingAdvice {
        irrigation: irrigation_text(irrigation(report), language).to_string(),
        spraying: spraying_text(spraying(report), language).to_string(),
        field_work: field_work_text(field_work(report), language).to_string(),
        alerts,
    };
}
