use crate::cli::ResizeArgs;
use crate::core::{
    BatchSummary, FileResult, ProcessingOptions, ResizeError, ResizeMode, ResizeResult,
};
use crate::services::{
    load_options_file, validate_options, write_report, BatchReport, ConsoleProgressSink,
    ImageCrateTransformer,
};
use crate::storage::LocalFileSelector;
use crate::App;
use anyhow::Result;
use tracing::info;

/// オプションファイルとコマンドライン引数から処理オプションを組み立てる
///
/// コマンドライン引数が指定されていればファイルの値より優先する。
pub fn build_options(args: &ResizeArgs) -> ResizeResult<ProcessingOptions> {
    let mut options = match &args.options_file {
        Some(path) => load_options_file(path)?,
        None => ProcessingOptions::default(),
    };

    if let Some(mode) = args.mode {
        options.resize_mode = mode.into();
    } else if args.percentage.is_some() && args.width.is_none() && args.height.is_none() {
        // -p のみ指定された場合は百分率モードとみなす
        options.resize_mode = ResizeMode::Percentage;
    }

    if args.width.is_some() {
        options.width = args.width;
    }
    if args.height.is_some() {
        options.height = args.height;
    }
    if args.percentage.is_some() {
        options.percentage = args.percentage;
    }
    if args.format.is_some() {
        options.format = args.format.clone();
    }
    if args.quality.is_some() {
        options.quality = args.quality;
    }
    if args.output_dir.is_some() {
        options.output_directory = args.output_dir.clone();
    }

    validate_options(&options)?;
    Ok(options)
}

/// Execute resize command
pub async fn execute_resize(args: ResizeArgs) -> Result<BatchSummary> {
    let options = build_options(&args)?;

    let selector = if args.recursive {
        LocalFileSelector::recursive()
    } else {
        LocalFileSelector::new()
    };
    let app = App::new(selector, ImageCrateTransformer::new());

    println!("🖼️  バッチリサイズ開始");
    match options.resize_mode {
        ResizeMode::Pixels => println!(
            "   - サイズ: {} x {}",
            describe_dimension(options.width),
            describe_dimension(options.height)
        ),
        ResizeMode::Percentage => println!(
            "   - 倍率: {}%",
            options
                .percentage
                .map_or_else(|| "-".to_string(), |p| p.to_string())
        ),
    }
    if let Some(format) = &options.format {
        println!("   - 出力形式: {format}");
    }
    if let Some(dir) = &options.output_directory {
        println!("   - 出力先: {}", dir.display());
    }

    let sink = if args.quiet {
        ConsoleProgressSink::quiet()
    } else {
        ConsoleProgressSink::new()
    };

    let results = app.run(&args.inputs, &options, &sink).await?;
    let summary = BatchSummary::from_results(&results);
    info!(total = summary.total, failed = summary.failed, "resize command finished");

    print_failures(&results);
    println!(
        "\n✅ 処理完了: 成功 {}件 / 失敗 {}件",
        summary.succeeded, summary.failed
    );

    if let Some(report_path) = &args.report {
        let report = BatchReport::new(&options, results, app.backend_name());
        write_report(&report, report_path).await?;
        println!("📄 レポートを {} に保存しました", report_path.display());
    }

    Ok(summary)
}

/// バッチ全体のエラーに対する対処方法
pub fn error_suggestion(error: &anyhow::Error) -> Option<String> {
    error
        .downcast_ref::<ResizeError>()
        .and_then(|e| e.context().suggestion)
}

fn describe_dimension(value: Option<u32>) -> String {
    value.map_or_else(|| "auto".to_string(), |v| v.to_string())
}

fn print_failures(results: &[FileResult]) {
    for result in results.iter().filter(|r| !r.success) {
        eprintln!(
            "❌ {}: {}",
            result.file.display(),
            result.error.as_deref().unwrap_or("unknown error")
        );
    }
}
