use crate::services::OutputFormat;

/// 対応形式の一覧表示用の行
pub fn format_lines() -> Vec<String> {
    OutputFormat::ALL
        .iter()
        .map(|format| {
            let quality = if format.uses_quality() {
                " (quality対応)"
            } else {
                ""
            };
            format!("{}{quality}", format.extensions().join(", "))
        })
        .collect()
}

/// Execute formats command
pub fn execute_formats() {
    println!("🗂️  対応している出力形式:");
    for line in format_lines() {
        println!("   - {line}");
    }
}
