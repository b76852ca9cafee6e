use super::LadderReport;
use graphwalk_core::error::Result;

pub fn format_human(report: &LadderReport<'_>) -> String {
    if report.ladder.is_empty() {
        "No word ladder found.".to_string()
    } else {
        format!("Word ladder found: {}", report.ladder)
    }
}

/// Output ladder in human-readable format
pub fn output_human(report: &LadderReport<'_>) {
    println!("{}", format_human(report));
}

/// Output ladder in JSON format
pub fn output_json(report: &LadderReport<'_>) -> Result<()> {
    let mut output = serde_json::json!({
        "begin": report.begin,
        "end": report.end,
        "dictionary_size": report.dictionary_size,
        "found": !report.ladder.is_empty(),
        "steps": report.ladder.steps(),
        "ladder": report.ladder,
    });

    if let Some(err) = &report.rejection {
        if let Some(obj) = output.as_object_mut() {
            obj.insert(
                "error".to_string(),
                serde_json::json!({
                    "type": err.error_type(),
                    "message": err.to_string(),
                }),
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Output ladder in records format
pub fn output_records(report: &LadderReport<'_>) {
    let mut header = format!(
        "H graphwalk=1 records=1 mode=ladder begin={} end={} words={} found={} steps={}",
        report.begin,
        report.end,
        report.dictionary_size,
        !report.ladder.is_empty(),
        report.ladder.steps()
    );
    if let Some(err) = &report.rejection {
        header.push_str(&format!(" error={}", err.error_type()));
    }
    println!("{}", header);

    for (step, word) in report.ladder.words().iter().enumerate() {
        println!("W {} {}", step, word);
    }
}
