//! Interactive questionnaire shell

use crate::output;
use crate::OutputFormat;
use orgnet::{AssessmentSession, Dimension, Likert, RenderFormat, SessionError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn read_line(stdin: &mut impl BufRead, line: &mut String) -> io::Result<bool> {
    line.clear();
    Ok(stdin.read_line(line)? > 0)
}

/// Ask every question; Enter keeps the current answer. Returns `false` on EOF.
fn walk_questionnaire(session: &mut AssessmentSession, stdin: &mut impl BufRead) -> io::Result<bool> {
    let mut line = String::new();

    for dimension in Dimension::ALL {
        println!("\n== {} ==", dimension.heading());
        for q in dimension.questions() {
            println!("\n{}", q.prompt());
            for (i, label) in q.options().iter().enumerate() {
                println!("  {}) {}", i + 1, label);
            }

            loop {
                let current = session.answers().get(q);
                eprint!("{} [{}] ", q.selector(), current);
                io::stderr().flush()?;

                if !read_line(stdin, &mut line)? {
                    return Ok(false);
                }
                let answer = line.trim();
                if answer.is_empty() {
                    break;
                }
                match answer.parse::<u8>().ok().and_then(Likert::from_value) {
                    Some(level) => {
                        session.set_answer(q, level);
                        break;
                    }
                    None => println!("Please enter a number from 1 to 5."),
                }
            }
        }
    }
    Ok(true)
}

fn print_help() {
    println!("Commands:");
    println!("  :scores           — Show calculated scores");
    println!("  :selections       — Show your selections");
    println!("  :answers          — Answer the questionnaire again");
    println!("  :triggers         — List simulation trigger contexts");
    println!("  :trigger <name>   — Select a trigger context");
    println!("  :match            — Show the matched typical network");
    println!("  :simulate         — Run the simulation and show strategies");
    println!("  :render [dir]     — Write graphs (dot, json, html)");
    println!("  :reset            — Reset questionnaire and selections");
    println!("  :quit             — Exit shell");
}

/// Submit, then load the configured (or first) trigger
fn submit_and_load(session: &mut AssessmentSession, format: OutputFormat) -> anyhow::Result<()> {
    session.submit();
    output::print_scores(session, format)?;

    let preferred = session.preferred_trigger();
    select(session, &preferred);
    Ok(())
}

fn select(session: &mut AssessmentSession, name: &str) {
    match session.select_trigger(name) {
        Ok(catalog) => println!(
            "Simulation trigger context: {} ({} record(s))",
            catalog.trigger,
            catalog.len()
        ),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn show_match(session: &AssessmentSession) {
    match session.report() {
        Ok(report) => output::print_match(&report),
        Err(SessionError::NoMatch) => println!(
            "No matching simulation data found for the calculated scores. \
             Please try different questionnaire answers or check the JSON data structure."
        ),
        Err(e) => eprintln!("Error: {}", e),
    }
}

pub fn run_shell(mut session: AssessmentSession, format: OutputFormat) -> anyhow::Result<()> {
    println!("Network Assessment Questionnaire: Organization");
    println!("Press Enter to keep the suggested answer. :help lists commands after the questionnaire.");

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    if !walk_questionnaire(&mut session, &mut stdin)? {
        println!("Bye!");
        return Ok(());
    }
    submit_and_load(&mut session, format)?;
    show_match(&session);

    let mut line = String::new();
    loop {
        eprint!("orgnet> ");
        io::stderr().flush()?;

        if !read_line(&mut stdin, &mut line)? {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (command, arg) = match trimmed.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (trimmed, ""),
        };

        match command {
            ":quit" | ":exit" | ":q" => break,
            ":help" | ":h" => print_help(),
            ":scores" => match session.submission() {
                Some(s) => println!("{}", output::scores_table(&s.scores)),
                None => println!("Questionnaire has not been submitted."),
            },
            ":selections" => match session.submission() {
                Some(s) => println!("{}", output::selections_table(&s.selections)),
                None => println!("Questionnaire has not been submitted."),
            },
            ":answers" => {
                if !walk_questionnaire(&mut session, &mut stdin)? {
                    break;
                }
                submit_and_load(&mut session, format)?;
                show_match(&session);
            }
            ":triggers" => output::print_triggers(&session.triggers(), format)?,
            ":trigger" => {
                if arg.is_empty() {
                    println!("Usage: :trigger <name>");
                } else {
                    select(&mut session, arg);
                    show_match(&session);
                }
            }
            ":match" => show_match(&session),
            ":simulate" => match session.run_simulation() {
                Ok(_) => match session.report() {
                    Ok(report) => {
                        output::print_strategies(&report);
                        println!("{}", output::graphs_table(&report));
                    }
                    Err(e) => eprintln!("Error: {}", e),
                },
                Err(e) => eprintln!("Error: {}", e),
            },
            ":render" => {
                let dir = if arg.is_empty() {
                    session.config().output_dir.clone()
                } else {
                    PathBuf::from(arg)
                };
                match session.render(&dir, &RenderFormat::ALL) {
                    Ok(paths) => println!("Wrote {} file(s) to {}", paths.len(), dir.display()),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            ":reset" => {
                session.reset();
                println!("Questionnaire and selections reset.");
                if !walk_questionnaire(&mut session, &mut stdin)? {
                    break;
                }
                submit_and_load(&mut session, format)?;
                show_match(&session);
            }
            other => println!("Unknown command: {} (try :help)", other),
        }
    }

    println!("Bye!");
    Ok(())
}
