use crate::app::render::render_evaluation;
use crate::cli::commands::{Cli, Commands, InputArgs};
use anyhow::{Context, Result};
use zentao::Config;
use zentao::core::rubric::{EvaluationResult, evaluate};
use zentao::feedback::{DeepFeedback, FeedbackContext};
use zentao::gateway::wire::EvaluateResponse;
use zentao::report::{ReportInput, default_report_path, write_report};

/// Resolve the input and evaluate it once.
async fn evaluate_input(input: InputArgs, config: &Config) -> Result<(String, EvaluationResult)> {
    let source = input.into_source()?;
    let text = source.resolve(&config.links).await?;
    let result = evaluate(&text);
    tracing::info!(vetoed = result.is_vetoed(), chars = text.chars().count(), "evaluated copy");
    Ok((text, result))
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Evaluate { input, json } => {
            let (_, result) = evaluate_input(input, &config).await?;
            if json {
                let body = serde_json::to_string_pretty(&EvaluateResponse::from(&result))?;
                println!("{body}");
            } else {
                print!("{}", render_evaluation(&result));
            }
            Ok(())
        }

        Commands::Feedback { input } => {
            let (text, result) = evaluate_input(input, &config).await?;
            let ctx = FeedbackContext::from_evaluation(&text, &result);
            let critique = DeepFeedback::from_config(&config).critique(&ctx).await?;
            println!("{critique}");
            Ok(())
        }

        Commands::Report {
            input,
            output,
            no_feedback,
        } => {
            let (text, result) = evaluate_input(input, &config).await?;

            let critique = if no_feedback {
                None
            } else {
                let ctx = FeedbackContext::from_evaluation(&text, &result);
                match DeepFeedback::from_config(&config).critique(&ctx).await {
                    Ok(critique) => Some(critique),
                    Err(e) => {
                        tracing::warn!(error = %e, "writing report without deep feedback");
                        None
                    }
                }
            };

            let now = chrono::Local::now();
            let path = output.unwrap_or_else(|| default_report_path(&config.report.output_dir(), now));
            let written = write_report(
                &ReportInput {
                    text: &text,
                    evaluation: &result,
                    feedback: critique.as_deref(),
                    generated_at: now,
                    max_text_chars: config.report.max_text_chars,
                },
                &path,
            )
            .with_context(|| format!("failed to write report to {}", path.display()))?;
            println!("{}", written.display());
            Ok(())
        }

        Commands::Gateway { port, host } => {
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            let port = port.unwrap_or(config.gateway.port);
            zentao::gateway::run_gateway(&host, port, config).await
        }
    }
}
