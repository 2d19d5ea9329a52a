use anyhow::Context;
use depot_client::StoreClient;
use depot_ops::import::{EmployeeImporter, ImportReport, ProductImporter, template};
use depot_ops::{Config, QueryCache, dashboard};

const USAGE: &str = "usage: depot-ops <command>

commands:
  import-products <file.csv>     bulk-import products
  import-employees <file.csv>    bulk-import employees
  template-products <out.csv>    write the product import template
  template-employees <out.csv>   write the employee import template
  dashboard                      print the dashboard summary";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    depot_ops::logger::init_logger(&config.log_filter);

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_default();

    match command.as_str() {
        "import-products" => {
            let path = args.next().context(USAGE)?;
            let data =
                std::fs::read(&path).with_context(|| format!("reading {path}"))?;
            let store = StoreClient::new(&config.client_config())?;
            let cache = QueryCache::new();
            let report = ProductImporter::new(&store, &cache)
                .run_with_progress(&data, |pct| eprintln!("  {pct}%"))
                .await?;
            print_report(&report);
        }
        "import-employees" => {
            let path = args.next().context(USAGE)?;
            let data =
                std::fs::read(&path).with_context(|| format!("reading {path}"))?;
            let store = StoreClient::new(&config.client_config())?;
            let cache = QueryCache::new();
            let report = EmployeeImporter::new(&store, &cache)
                .run_with_progress(&data, |pct| eprintln!("  {pct}%"))
                .await?;
            print_report(&report);
        }
        "template-products" => {
            let path = args.next().context(USAGE)?;
            std::fs::write(&path, template::products_template())
                .with_context(|| format!("writing {path}"))?;
            println!("เขียนไฟล์ต้นแบบแล้ว: {path}");
        }
        "template-employees" => {
            let path = args.next().context(USAGE)?;
            std::fs::write(&path, template::employees_template())
                .with_context(|| format!("writing {path}"))?;
            println!("เขียนไฟล์ต้นแบบแล้ว: {path}");
        }
        "dashboard" => {
            let store = StoreClient::new(&config.client_config())?;
            let cache = QueryCache::new();
            let summary = dashboard::fetch_dashboard(&store, &cache).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn print_report(report: &ImportReport) {
    println!("นำเข้าสำเร็จ {} รายการ", report.success_count);
    if !report.errors.is_empty() {
        println!("พบข้อผิดพลาด {} รายการ:", report.errors.len());
        for error in &report.errors {
            println!("  - {error}");
        }
    }
}
