use clap::Parser;
use lab_report_common::{load_catalog, AnalyteCatalog};
use lab_report_rust::{cli, config, error, export, pipeline, scanner};
use cli::{AliasArgs, Cli, Commands};
use config::Config;
use error::{LabReportError, Result};
use pipeline::LabPipeline;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "lab_report_rust=debug,lab_report_common=debug"
    } else {
        "lab_report_rust=info,lab_report_common=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_catalog(config: &Config, alias: &AliasArgs) -> Result<AnalyteCatalog> {
    let alias_file = config.resolve_alias_file(alias.aliases.clone());
    if let Some(path) = &alias_file {
        if !path.exists() {
            return Err(LabReportError::FileNotFound(path.display().to_string()));
        }
    }
    Ok(load_catalog(alias_file.as_deref(), alias.replace_aliases)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Extract { inputs, output, alias, recursive } => {
            println!("🧪 lab-report - 検査報告書解析\n");

            // 1. 入力スキャン
            println!("[1/3] 報告書をスキャン中...");
            let documents = scanner::scan_inputs(&inputs, recursive || config.recursive)?;
            println!("✔ {}件の報告書を検出\n", documents.len());

            if documents.is_empty() {
                return Err(LabReportError::NoDocumentsFound(format!("{:?}", inputs)));
            }

            // 2. 抽出・照合
            println!("[2/3] 検体値を抽出中...");
            let pipeline = LabPipeline::new(resolve_catalog(&config, &alias)?)?;
            let outcomes = pipeline.process_all(&documents, cli.verbose)?;
            println!("✔ 抽出完了\n");

            for outcome in &outcomes {
                println!("{}  [{}]", outcome.summary, outcome.file_name);
            }

            // 3. 結果保存
            println!("\n[3/3] 結果を保存中...");
            export::write_json(&outcomes, &output)?;
            println!("✔ 結果を保存: {}", output.display());

            println!("\n✅ 解析完了");
        }

        Commands::Export { input, format, output, title, alias } => {
            println!("📄 lab-report - エクスポート\n");

            let outcomes = export::read_json(&input)?;
            let catalog = resolve_catalog(&config, &alias)?;

            // JSONファイルの親ディレクトリを既定の出力先にする
            let output_dir = output.unwrap_or_else(|| {
                input
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| PathBuf::from("."))
            });
            let title = title.unwrap_or_else(|| config.output_title.clone());

            export::export_results(&outcomes, &catalog.display_order, &format, &output_dir, &title)?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Run { inputs, output, format, alias, recursive } => {
            println!("🚀 lab-report - 一括処理\n");

            // 1. Scan
            println!("[1/3] 報告書をスキャン中...");
            let documents = scanner::scan_inputs(&inputs, recursive || config.recursive)?;
            println!("✔ {}件の報告書を検出\n", documents.len());

            if documents.is_empty() {
                return Err(LabReportError::NoDocumentsFound(format!("{:?}", inputs)));
            }

            // 2. Extract
            println!("[2/3] 検体値を抽出中...");
            let pipeline = LabPipeline::new(resolve_catalog(&config, &alias)?)?;
            let outcomes = pipeline.process_all(&documents, cli.verbose)?;
            println!("✔ 抽出完了\n");

            // 3. Export
            println!("[3/3] エクスポート中...");
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            let json_path = export::json_output_path(&output_dir, &config.output_title);
            export::write_json(&outcomes, &json_path)?;
            println!("✔ JSON出力: {}", json_path.display());
            export::export_results(
                &outcomes,
                &pipeline.catalog().display_order,
                &format,
                &output_dir,
                &config.output_title,
            )?;

            println!("\n✅ 完了");
        }

        Commands::Aliases { alias } => {
            let catalog = resolve_catalog(&config, &alias)?;

            println!("エイリアス辞書（{}件）:", catalog.aliases.len());
            for entry in catalog.aliases.iter() {
                println!("  {:<40} → {}", entry.name, entry.code);
            }
            println!("表示順:");
            println!("  {}", catalog.display_order.codes().join(", "));
        }

        Commands::Config { set_alias_file, show } => {
            let mut config = config;

            if let Some(path) = set_alias_file {
                config.set_alias_file(path)?;
                println!("✔ エイリアス辞書を設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!(
                    "  エイリアス辞書: {}",
                    config
                        .resolve_alias_file(None)
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".into())
                );
                println!("  出力ファイル名: {}", config.output_title);
                println!("  再帰スキャン: {}", if config.recursive { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
