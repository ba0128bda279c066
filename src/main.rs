use clap::Parser;
use contact_form::cli::commands::{cmd_page, cmd_submit};
use contact_form::cli::config::{Cli, Commands, load_config};
use contact_form::trace::subscriber::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());

    let accepted = match cli.command {
        Commands::Submit {
            action,
            fields,
            page_url,
        } => cmd_submit(&action, &fields, page_url.as_deref(), &config, cli.verbose).await?,
        Commands::Page {
            file,
            form_id,
            result_id,
        } => {
            cmd_page(
                &file,
                form_id.as_deref(),
                result_id.as_deref(),
                &config,
                cli.verbose,
            )
            .await?
        }
    };

    if !accepted {
        std::process::exit(1);
    }

    Ok(())
}
