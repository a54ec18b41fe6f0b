//! Interactive chat application for the Career Cosmos AI navigator.
//!
//! This binary provides a REPL interface for driving the guided career
//! conversation and inspecting dashboard state.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage against a local backend
//! cosmos-chat
//!
//! # Point at a deployed backend
//! cosmos-chat --url https://cosmos.example.com/api/
//!
//! # Use a named session
//! cosmos-chat --session astronaut-7
//!
//! # Disable colors (useful for piping output)
//! cosmos-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/profile` - Show level, XP, coins, and skills
//! - `/quests` - List available quests
//! - `/complete <id>` - Complete a quest and collect its rewards
//! - `/reset` - Start a fresh conversation
//! - `/quit` - Exit the application
//!
//! When the navigator asks a question, answer by typing the number of an
//! option or by typing free text.

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use cosmos::chat::{ChatArgs, ChatCommand, ChatConfig, help_text, parse_command};
use cosmos::{
    Conversation, Cosmos, NavigatorApi, PlainTextRenderer, Renderer, TurnOutcome, UserProfile,
};

/// Main entry point for the cosmos-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("cosmos-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;

    let client = Cosmos::with_options(config.base_url, config.session, None)?;
    let mut renderer = PlainTextRenderer::with_color(use_color);

    // Initial profile load, falling back to default data when the backend is
    // unreachable so the chat still works.
    let profile = match client.fetch_profile().await {
        Ok(profile) => profile,
        Err(err) => {
            renderer.print_error(&format!(
                "Could not reach mission control ({err}); starting with fallback data"
            ));
            UserProfile::default()
        }
    };
    let mut conversation = Conversation::with_profile(client.clone(), profile);

    let mut rl = DefaultEditor::new()?;

    println!("Career Cosmos Navigator (session: {})", client.session());
    println!("Type /help for commands, /quit to exit\n");

    loop {
        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Safe travels!");
                            break;
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Profile => {
                            print_profile(conversation.profile());
                        }
                        ChatCommand::Quests => match client.fetch_quests().await {
                            Ok(quests) => {
                                println!("    Available missions:");
                                for quest in quests {
                                    println!(
                                        "      [{}] {} (+{} XP, +{} coins, {})",
                                        quest.id, quest.name, quest.xp, quest.coins, quest.skill
                                    );
                                }
                            }
                            Err(err) => {
                                renderer.print_error(&format!("Failed to fetch quests: {err}"))
                            }
                        },
                        ChatCommand::CompleteQuest(quest_id) => {
                            match client.complete_quest(quest_id).await {
                                Ok(outcome) if outcome.success => {
                                    renderer.print_notice(
                                        "Mission accomplished! Stellar rewards received!",
                                    );
                                    conversation.reload_profile(&mut renderer).await;
                                }
                                Ok(outcome) => {
                                    let message = outcome
                                        .message
                                        .unwrap_or_else(|| "Quest could not be completed".to_string());
                                    renderer.print_notice(&message);
                                }
                                Err(err) => renderer
                                    .print_error(&format!("Failed to complete quest: {err}")),
                            }
                        }
                        ChatCommand::Goals => match client.fetch_goals().await {
                            Ok(catalog) => {
                                println!("    Short-term goals:");
                                for goal in &catalog.short_term {
                                    println!(
                                        "      {} (+{} XP, +{} coins)",
                                        goal.name, goal.xp_reward, goal.coins_reward
                                    );
                                }
                                println!("    Medium-term goals:");
                                for goal in &catalog.medium_term {
                                    println!(
                                        "      {} (+{} XP, +{} coins)",
                                        goal.name, goal.xp_reward, goal.coins_reward
                                    );
                                }
                            }
                            Err(err) => {
                                renderer.print_error(&format!("Failed to fetch goals: {err}"))
                            }
                        },
                        ChatCommand::Paths => match client.fetch_career_paths().await {
                            Ok(paths) => {
                                println!("    Career paths:");
                                for (name, path) in &paths {
                                    println!("      {}: {}", name, path.description);
                                    println!("        skills: {}", path.skills.join(", "));
                                }
                            }
                            Err(err) => renderer
                                .print_error(&format!("Failed to fetch career paths: {err}")),
                        },
                        ChatCommand::SelectPath(path) => {
                            match client.select_career(&path).await {
                                Ok(_) => {
                                    renderer
                                        .print_notice(&format!("Career path set to: {}", path));
                                    conversation.reload_profile(&mut renderer).await;
                                }
                                Err(err) => renderer
                                    .print_error(&format!("Failed to select career path: {err}")),
                            }
                        }
                        ChatCommand::Reset => {
                            let profile = conversation.profile().clone();
                            conversation = Conversation::with_profile(client.clone(), profile);
                            renderer.print_notice("Conversation reset.");
                        }
                        ChatCommand::Stats => {
                            print_stats(&conversation, client.session());
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // A bare number answers the pending question by option index.
                if let Ok(index) = line.parse::<usize>()
                    && let Some(options) = conversation.transcript().pending_options()
                    && index >= 1
                    && index <= options.len()
                {
                    let option = options[index - 1].clone();
                    conversation.submit_option(&option, &mut renderer).await;
                    continue;
                }

                // Regular message - send to the navigator
                let outcome = conversation.submit_text(line, &mut renderer).await;
                if outcome == TurnOutcome::Rejected {
                    renderer.print_notice("Still waiting on the navigator; try again shortly.");
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nSafe travels!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

fn print_profile(profile: &UserProfile) {
    println!("    Commander Profile:");
    println!("      Level: {}", profile.level);
    println!("      XP: {}", profile.xp);
    println!("      Coins: {}", profile.coins);
    println!("      Daily streak: {} days", profile.daily_streak);
    match profile.career_path.as_deref() {
        Some(path) => println!("      Career path: {}", path),
        None => println!("      Career path: (not selected)"),
    }
    if profile.badges.is_empty() {
        println!("      Badges: (none)");
    } else {
        println!("      Badges: {}", profile.badges.join(", "));
    }
    if !profile.skills_progress.is_empty() {
        println!("      Skills:");
        for (skill, progress) in &profile.skills_progress {
            println!("        {}: {}%", skill, progress);
        }
    }
    println!(
        "      Lifetime: {} quests, {} XP, {} coins",
        profile.total_quests_completed, profile.total_xp_earned, profile.total_coins_earned
    );
}

fn print_stats(conversation: &Conversation<Cosmos>, session: &str) {
    println!("    Session Statistics:");
    println!("      Session: {}", session);
    println!("      Messages: {}", conversation.message_count());
    println!(
        "      Pending question: {}",
        if conversation.transcript().pending_options().is_some() {
            "yes"
        } else {
            "no"
        }
    );
}
