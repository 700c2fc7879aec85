use crosscut_adapters::{BpoHealthProbe, FileAuditFeed, FileProductCatalog, HttpTriggerGateway, ServiceConfig};
use crosscut_core::{AdminProvider, ProviderError, Record, Resource};
use crosscut_domain::TriggerRequest;

type Provider = AdminProvider<FileAuditFeed, FileProductCatalog, HttpTriggerGateway>;

fn usage() -> ! {
    eprintln!("uso: crosscut-cli <comando>");
    eprintln!("  workflows [--id <ID>]    lista las vistas de workflow (o una)");
    eprintln!("  audit                    lista el audit log crudo");
    eprintln!("  products                 lista el catálogo de productos");
    eprintln!("  trigger --product <N> [--revision <R>] [--event <E>]");
    eprintln!("  metrics                  conteos del dashboard");
    eprintln!("  health                   estado del BPO");
    std::process::exit(2);
}

fn build_provider(config: &ServiceConfig) -> Provider {
    AdminProvider::new(FileAuditFeed::new(config.audit_log_path.clone()),
                       FileProductCatalog::new(config.plm_data_path.clone()),
                       HttpTriggerGateway::new(config.bpo_service_url.clone()))
}

fn print_records(items: &[Record]) {
    for item in items {
        match serde_json::to_string(item) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("serialización fallida: {e}"),
        }
    }
}

fn exit_code(err: &ProviderError) -> i32 {
    match err {
        ProviderError::NotFound { .. } | ProviderError::UnknownResource(_) => 4,
        _ => 5,
    }
}

async fn run_list(provider: &Provider, resource: Resource, id: Option<&str>) -> Result<(), ProviderError> {
    match id {
        Some(id) => {
            let record = provider.get_one(resource, id).await?;
            print_records(std::slice::from_ref(&record));
        }
        None => {
            let result = provider.list(resource).await?;
            print_records(&result.items);
            println!("total: {}", result.total);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Cargar .env si existe para AUDIT_LOG_PATH / BPO_SERVICE_URL / PLM_DATA_PATH
    let _ = dotenvy::dotenv();
    // Backend para los warnings de los adapters (ej. audit log corrupto)
    env_logger::init();
    let config = ServiceConfig::from_env();
    let provider = build_provider(&config);

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let result = match args[1].as_str() {
        "workflows" => {
            let mut id: Option<String> = None;
            let mut i = 2;
            while i < args.len() {
                if args[i] == "--id" {
                    i += 1;
                    if i < args.len() {
                        id = Some(args[i].clone());
                    }
                }
                i += 1;
            }
            run_list(&provider, Resource::Workflows, id.as_deref()).await
        }
        "audit" => run_list(&provider, Resource::Audit, None).await,
        "products" => run_list(&provider, Resource::Products, None).await,
        "trigger" => {
            let mut product: Option<String> = None;
            let mut revision: Option<String> = None;
            let mut event = "schematic.released".to_string();
            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--product" => {
                        i += 1;
                        if i < args.len() { product = Some(args[i].clone()); }
                    }
                    "--revision" => {
                        i += 1;
                        if i < args.len() { revision = Some(args[i].clone()); }
                    }
                    "--event" => {
                        i += 1;
                        if i < args.len() { event = args[i].clone(); }
                    }
                    _ => {}
                }
                i += 1;
            }
            let Some(product) = product else {
                eprintln!("trigger requiere --product");
                usage();
            };
            let mut payload = serde_json::json!({ "product_name": product });
            if let Some(rev) = revision {
                payload["revision"] = serde_json::Value::String(rev);
            }
            let request = TriggerRequest { trigger_event: event, payload };
            match provider.create(Resource::Workflows, request).await {
                Ok(view) => {
                    println!("disparado: {} ({})", view.workflow_id, view.message);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        "metrics" => match provider.system_metrics().await {
            Ok(m) => {
                println!("total: {}", m.total_workflows);
                println!("completados: {}", m.successful_workflows);
                println!("fallidos: {}", m.failed_workflows);
                println!("en curso: {}", m.running_workflows());
                Ok(())
            }
            Err(e) => Err(e),
        },
        "health" => {
            let probe = BpoHealthProbe::new(config.bpo_service_url.clone());
            match probe.health().await {
                Ok(h) => {
                    println!("{} {} ({})", h.service, h.status, h.version);
                    Ok(())
                }
                Err(e) => Err(ProviderError::from(e)),
            }
        }
        _ => usage(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(exit_code(&e));
    }
}
