use anyhow::Result;
use pickles::args;
use pickles::config::PicklesConfig;
use pickles::pipeline::Pipeline;
use pickles::scheduler::PipelineScheduler;
use pickles::usage;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match args::parse(&argv) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("\u{274c} {}", e);
            usage::print_usage();
            std::process::exit(2);
        }
    };

    if parsed.help {
        usage::print_usage();
        return Ok(());
    }

    let config = PicklesConfig::from_env();

    if parsed.schedule {
        PipelineScheduler::new(config, parsed).start().await
    } else {
        Pipeline::new(config).run(&parsed).await
    }
}
