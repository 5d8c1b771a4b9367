//! CLI commands

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::agent::{AgentControl, VoiceSession};
use crate::api::ApiClient;
use crate::config::Config;
use crate::views;

#[derive(Parser)]
#[command(name = "vitalmesh")]
#[command(about = "Client for the VitalMesh clinic workflow backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config path (default: ~/.vitalmesh/config.yml)
    #[arg(long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    Patients,

    /// Show a full patient record
    Patient {
        /// Patient ID
        patient_id: String,
    },

    /// Show the latest intake note
    Note,

    /// Talk to the clinical chatbot
    Chat {
        /// Message to send
        message: Option<String>,

        /// Reload the chatbot's patient data instead of chatting
        #[arg(long)]
        refresh: bool,
    },

    /// Run a patient voice visit
    Voice,

    /// Show voice agent and chatbot status
    Status,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let api = Arc::new(ApiClient::from_config(&config.api));

    // Create a multi-threaded runtime for CLI operations
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        match cli.command {
            Commands::Patients => {
                match api.patients().await {
                    Ok(patients) => {
                        if patients.is_empty() {
                            println!("No patients found");
                        } else {
                            for patient in patients {
                                println!(
                                    "[{}] {}",
                                    patient.id,
                                    patient.name().unwrap_or("Unknown")
                                );
                            }
                        }
                    }
                    Err(err) => println!("{err}"),
                }
                Ok(())
            }

            Commands::Patient { patient_id } => {
                match api.patient(&patient_id).await {
                    Ok(record) => print!("{}", views::patient::patient_detail(&patient_id, &record)),
                    Err(err) => println!("{err}"),
                }
                Ok(())
            }

            Commands::Note => {
                match api.latest_note().await {
                    Ok(note) => print!("{}", views::patient::patient_report(&note)),
                    Err(err) => println!("{err}"),
                }
                Ok(())
            }

            Commands::Chat { message, refresh } => {
                if refresh {
                    match api.refresh_chatbot_data().await {
                        Ok(result) => println!("{}", result.message),
                        Err(err) => println!("Failed to refresh data. {err}"),
                    }
                    return Ok(());
                }

                // No message: open the chat like the page does, greeting plus
                // a status check
                let Some(message) = message else {
                    println!("{}", views::chat::GREETING);
                    match api.chatbot_status().await {
                        Ok(status) => println!(
                            "(chatbot {}, tracking {} patients)",
                            status.status,
                            status.patient_count.unwrap_or(0)
                        ),
                        Err(err) => println!("({err})"),
                    }
                    return Ok(());
                };

                let now = chrono::Local::now();
                println!(
                    "{}",
                    views::chat::transcript_line(views::chat::Speaker::User, now, &message)
                );

                match api.send_chat_message(&message).await {
                    Ok(reply) => println!(
                        "{}",
                        views::chat::transcript_line(
                            views::chat::Speaker::Bot,
                            chrono::Local::now(),
                            &views::chat::reply_content(&reply),
                        )
                    ),
                    Err(err) if err.is_connectivity() => {
                        println!("{}", views::chat::CONNECTION_FAILED)
                    }
                    Err(err) => println!("{err}"),
                }
                Ok(())
            }

            Commands::Voice => {
                let control = Arc::clone(&api) as Arc<dyn AgentControl>;
                let mut session = VoiceSession::new(control);

                session.initialize().await;
                println!("{}", views::voice::status_line(&session.display()));

                if session.display().active {
                    println!("Press Enter to end the conversation");
                    let mut line = String::new();
                    std::io::stdin().read_line(&mut line)?;

                    session.end_conversation().await;
                    println!("{}", views::voice::status_line(&session.display()));
                }
                Ok(())
            }

            Commands::Status => {
                match api.agent_status().await {
                    Ok(reply) => {
                        println!("agent: {}", reply.status.as_deref().unwrap_or("unknown"))
                    }
                    Err(err) => println!("agent: {err}"),
                }
                match api.chatbot_status().await {
                    Ok(status) => println!(
                        "chatbot: {} ({} patients)",
                        status.status,
                        status.patient_count.unwrap_or(0)
                    ),
                    Err(err) => println!("chatbot: {err}"),
                }
                Ok(())
            }
        }
    })
}
