#[cfg(test)]
#[path = "reports_test.rs"]
mod tests;

use crate::domain::models::CropRecommendation;
use crate::domain::models::DiseaseReport;
use crate::domain::models::Evidence;
use crate::domain::models::FertilizerRecommendation;
use crate::domain::models::SubsidyResult;
use crate::domain::models::Treatment;
use crate::domain::models::WeatherOverview;

fn row(label: &str, value: &str) -> String {
    return format!("  {:<14}{value}", format!("{label}:"));
}

pub fn disease(report: &DiseaseReport) -> String {
    let mut lines = vec![
        "Detection result".to_string(),
        row("Disease", &report.disease.to_string()),
        row("Confidence", &format!("{:.1}%", report.confidence)),
    ];

    match &report.evidence {
        Evidence::Image { processing_time } => {
            lines.push(row("Analyzed in", processing_time));
        }
        Evidence::Symptoms { matched } => {
            lines.push(row("Matched", &format!("{matched} symptom(s)")));
        }
    }

    lines.push("".to_string());
    lines.push("Treatment".to_string());
    match &report.treatment {
        Treatment::Cure {
            chemical,
            organic,
            fertilizer,
            prevention,
        } => {
            lines.push(row("Chemical", chemical));
            lines.push(row("Organic", organic));
            lines.push(row("Fertilizer", fertilizer));
            lines.push(row("Prevention", prevention));
        }
        Treatment::Maintenance {
            maintenance,
            fertilizer,
            prevention,
        } => {
            lines.push(row("Maintenance", maintenance));
            lines.push(row("Fertilizer", fertilizer));
            lines.push(row("Prevention", prevention));
        }
    }

    return lines.join("\n");
}

pub fn crop(rec: &CropRecommendation) -> String {
    let mut lines = vec![
        "Crop recommendation".to_string(),
        row("Best crop", &rec.primary_choice),
    ];

    let alternatives = rec.alternatives();
    if !alternatives.is_empty() {
        lines.push(row("Also good", &alternatives.join(", ")));
    }
    lines.push(row("Reasoning", &rec.reasoning));
    lines.push(row("Tips", &rec.additional_tips));

    return lines.join("\n");
}

pub fn fertilizer(rec: &FertilizerRecommendation) -> String {
    return [
        "Fertilizer recommendation".to_string(),
        row("Fertilizer", &rec.fertilizer),
        row("Apply", &rec.application_method),
        row("Precautions", &rec.precautions),
    ]
    .join("\n");
}

pub fn subsidies(res: &SubsidyResult) -> String {
    let mut lines = vec![format!("Found {} eligible scheme(s)", res.total_schemes)];
    for subsidy in res.subsidies.iter() {
        lines.push(format!("  - {subsidy}"));
    }

    return lines.join("\n");
}

pub fn weather(overview: &WeatherOverview) -> String {
    let report = &overview.report;
    let mut feels_like = "".to_string();
    if let Some(temp) = report.main.feels_like {
        feels_like = format!(" (feels like {temp:.1}°C)");
    }

    let mut lines = vec![
        format!("{}: {}", report.name, report.description()),
        row("Temperature", &format!("{:.1}°C{feels_like}", report.main.temp)),
        row("Humidity", &format!("{:.0}%", report.main.humidity)),
        row("Wind", &format!("{:.1} km/h", report.wind_kmh())),
    ];
    if let Some(visibility) = report.visibility_km() {
        lines.push(row("Visibility", &format!("{visibility:.1} km")));
    }
    lines.push(row("Rain chance", &format!("{:.0}%", report.rain_chance())));

    if !overview.forecast.list.is_empty() {
        lines.push("".to_string());
        lines.push("Forecast".to_string());
        for day in overview.forecast.list.iter() {
            let date = day
                .date()
                .map(|e| return e.format("%a %d %b").to_string())
                .unwrap_or_default();
            lines.push(format!(
                "  {date:<12}{:<10}{:.0}°C / {:.0}°C",
                day.condition(),
                day.main.temp_max,
                day.main.temp_min
            ));
        }
    }

    lines.push("".to_string());
    lines.push("Farming advice".to_string());
    lines.push(row("Irrigation", &overview.advice.irrigation));
    lines.push(row("Spraying", &overview.advice.spraying));
    lines.push(row("Field work", &overview.advice.field_work));
    lines.push(row("Alerts", &overview.advice.alerts));

    return lines.join("\n");
}
