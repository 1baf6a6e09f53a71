use serde_json::json;
use serde_json::Value;

/// Successful chat reply as returned by `/api/chatbot/query`.
pub fn chat_fixture() -> Value {
    return json!({
        "status": "success",
        "response": {
            "text": "Spray neem oil every 7 days and remove infected leaves.",
            "confidence": 0.95,
            "suggestions": ["Disease Detection", "Weather Forecast", "Fertilizer Advice"]
        }
    });
}

pub fn image_detection_fixture() -> Value {
    return json!({
        "status": "success",
        "prediction": {
            "disease": "Leaf_Blight",
            "confidence": 91.3,
            "processing_time": "1.2s"
        },
        "treatment": {
            "chemical": "Copper oxychloride 50% WP @ 2g/L",
            "organic": "Neem oil spray (5ml/L) + Trichoderma",
            "fertilizer": "Balanced NPK 19:19:19 @ 2g/L",
            "prevention": "Improve drainage, avoid overhead irrigation"
        }
    });
}

pub fn symptom_detection_fixture() -> Value {
    return json!({
        "status": "success",
        "analysis": {
            "disease": "Healthy",
            "confidence": 75,
            "matched_symptoms": 0
        },
        "treatment": {
            "maintenance": "Continue current care practices",
            "fertilizer": "Regular balanced NPK",
            "prevention": "Weekly health monitoring"
        }
    });
}

pub fn crop_fixture() -> Value {
    return json!({
        "status": "success",
        "recommendation": {
            "recommended_crops": ["Rice", "Wheat", "Sugarcane"],
            "primary_choice": "Rice",
            "reasoning": "Best suited for clay soil type",
            "additional_tips": "Consider crop rotation and market demand"
        }
    });
}

pub fn fertilizer_fixture() -> Value {
    return json!({
        "status": "success",
        "recommendation": {
            "fertilizer": "Urea 50kg/acre + DAP 25kg/acre",
            "application_method": "Apply in morning or evening, avoid midday heat",
            "precautions": "Test soil pH before application, ensure adequate moisture"
        }
    });
}

pub fn subsidy_fixture() -> Value {
    return json!({
        "status": "success",
        "subsidies": ["PM-KISAN ₹6000/year", "Soil health card", "Kisan credit card"],
        "total_schemes": 3
    });
}

pub fn weather_fixture() -> Value {
    return json!({
        "status": "success",
        "weather": {
            "name": "Mumbai",
            "main": {"temp": 24.0, "feels_like": 26.0, "humidity": 80, "pressure": 1008},
            "weather": [{"main": "Rain", "description": "light rain", "icon": "10d"}],
            "wind": {"speed": 5.2},
            "visibility": 6000,
            "clouds": {"all": 90},
            "rain": {"1h": 2.5}
        }
    });
}

pub fn forecast_fixture() -> Value {
    return json!({
        "status": "success",
        "forecast": {
            "list": [
                {"dt": 1700000000, "main": {"temp_max": 31.0, "temp_min": 22.0}, "weather": [{"main": "Clear"}]},
                {"dt": 1700086400, "main": {"temp_max": 29.0, "temp_min": 21.0}, "weather": [{"main": "Clouds"}]}
            ]
        }
    });
}

pub fn error_fixture(message: &str) -> Value {
    return json!({
        "status": "error",
        "message": message
    });
}
