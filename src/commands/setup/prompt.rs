use anyhow::Result;
use std::io::{BufRead, Write};

/// What the user picked from the editor menu.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Choice {
    Keep,
    Detected(usize),
    Custom,
    Invalid,
}

/// Interpret a menu answer. Blank picks the first detected editor, or keeps
/// the current one when nothing was detected.
pub(super) fn parse_choice(answer: &str, detected: usize) -> Choice {
    let answer = answer.trim();
    if answer.is_empty() {
        return if detected == 0 { Choice::Keep } else { Choice::Detected(0) };
    }
    match answer.parse::<usize>() {
        Ok(0) => Choice::Keep,
        Ok(n) if n <= detected => Choice::Detected(n - 1),
        Ok(n) if n == detected + 1 => Choice::Custom,
        _ => Choice::Invalid,
    }
}

fn ask(question: &str) -> Result<String> {
    eprint!("{question}");
    std::io::stderr().flush().ok();
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask which editor to store. `None` keeps the current setting.
pub(super) fn prompt_editor(detected: &[(&str, &str)]) -> Result<Option<String>> {
    eprintln!("\nOpen assets directories with:");
    for (i, (name, cmd)) in detected.iter().enumerate() {
        eprintln!("  {}. {name} ({cmd})", i + 1);
    }
    eprintln!("  {}. Another editor command", detected.len() + 1);
    eprintln!("  0. Keep the current editor");

    let default = usize::from(!detected.is_empty());
    match parse_choice(&ask(&format!("Choice [{default}]: "))?, detected.len()) {
        Choice::Keep => Ok(None),
        Choice::Detected(i) => Ok(Some(detected[i].1.to_string())),
        Choice::Custom => {
            let cmd = ask("Editor command (opened as `<command> .`): ")?;
            let program = cmd.split_whitespace().next().unwrap_or_default();
            if program.is_empty() {
                return Ok(None);
            }
            if which::which(program).is_err() {
                eprintln!("{program} is not on PATH, keeping the current editor.");
                return Ok(None);
            }
            Ok(Some(cmd))
        }
        Choice::Invalid => {
            eprintln!("Invalid choice, keeping the current editor.");
            Ok(None)
        }
    }
}
