//! The `gradecast session` command — the interactive form surface.
//!
//! One command per interaction: `set` mutates a single field through the
//! validated path, `predict` snapshots the state and invokes the
//! predictor, `reset` restores the default record. Recoverable errors are
//! printed and the loop continues with the state untouched.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use gradecast_core::engine::PredictEngine;
use gradecast_core::fields::{Field, FieldValue};
use gradecast_core::form::FormManager;
use gradecast_model::load_predictor;

pub fn execute(model: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (config, model_path) = super::resolve(model, config_path)?;

    // Fatal load errors end the session before the prompt is ever shown.
    let predictor = load_predictor(&model_path)?;
    let engine = PredictEngine::new(Arc::from(predictor));
    let decimals = config.score_decimals as usize;

    println!("gradecast session — model: {}", engine.predictor_name());
    println!("Commands: set <field> <value>, show, reset, predict, fields, help, quit");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut manager = FormManager::new();

    loop {
        print!("gradecast> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("set ") {
            handle_set(&mut manager, rest.trim());
            continue;
        }

        match line {
            "" => {}
            "quit" | "exit" => break,
            "show" => println!("{}", super::input_table(manager.state())),
            "reset" => {
                manager.reset();
                println!("Values reset to defaults.");
            }
            "predict" => match engine.predict(manager.state()) {
                Ok(score) => println!("Predicted exam score: {score:.decimals$}"),
                Err(e) => println!("{e}"),
            },
            "fields" => super::fields::execute()?,
            "help" => {
                println!("Commands: set <field> <value>, show, reset, predict, fields, help, quit");
            }
            other => println!("unknown command: {other} (try help)"),
        }
    }

    Ok(())
}

fn handle_set(manager: &mut FormManager, args: &str) {
    let Some((name, raw)) = args.split_once(char::is_whitespace) else {
        println!("usage: set <field> <value>");
        return;
    };

    match name.parse::<Field>() {
        Ok(field) => {
            let value = FieldValue::parse_for(field, raw);
            match manager.set(field, value) {
                Ok(()) => println!("{} = {}", field.name(), manager.state().value(field)),
                Err(e) => println!("{e}"),
            }
        }
        Err(e) => println!("{e}"),
    }
}
