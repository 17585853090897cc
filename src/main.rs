use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use unify_registration::{
    Config, Field, Language, LogNotifier, LogRouter, RegistrationForm, SubmissionController,
    SubmissionOutcome,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in deployed environments)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("unify_registration=info".parse()?),
        )
        .init();

    info!("Starting registration session");

    // Load configuration from environment
    let config = Config::from_env()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut form = RegistrationForm::new();

    // Step 1: password display mode for this session
    if prompt(&mut lines, "Show passwords? [y/N]: ")?
        .to_lowercase()
        .starts_with('y')
    {
        form.toggle_password_visibility();
    }

    // Step 2: collect fields, re-prompting while a field stays invalid
    for field in Field::ALL {
        loop {
            let value = prompt(&mut lines, &format!("{}: ", field.label()))?;
            form.set_field(field, value.as_str());
            match form.error(field) {
                Some(msg) => println!("  {}", msg),
                None => {
                    println!("  {}", field_echo(&form, field, &value));
                    break;
                }
            }
        }
    }

    // Step 3: optional language selection
    let answer = prompt(
        &mut lines,
        &format!(
            "Language [es = {}, en = {}] (optional): ",
            Language::Es.native_name(),
            Language::En.native_name()
        ),
    )?;
    if !answer.trim().is_empty() {
        match Language::from_code(answer.trim()) {
            Ok(lang) => form.set_lang(lang),
            Err(err) => println!("  {} -- keeping {}", err, form.record().lang.native_name()),
        }
    }

    // Step 4: submit; the collaborators log the notification and navigation
    let controller =
        SubmissionController::new(config, Arc::new(LogNotifier), Arc::new(LogRouter))?;
    match controller.submit(&mut form).await {
        Ok(SubmissionOutcome::Success { .. }) => {
            info!("Registration complete");
            Ok(())
        }
        Ok(SubmissionOutcome::Failure { messages }) => {
            anyhow::bail!("Registration failed: {}", messages.join("; "))
        }
        Err(err) => anyhow::bail!("Registration not submitted: {}", err),
    }
}

/// Print a prompt and read one line of input.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(lines.next().transpose()?.unwrap_or_default())
}

/// Echo an accepted value, masking passwords unless visibility is toggled on.
fn field_echo(form: &RegistrationForm, field: Field, value: &str) -> String {
    match field {
        Field::Password | Field::PasswordCheck if !form.password_visible() => {
            "*".repeat(value.chars().count())
        }
        _ => value.to_string(),
    }
}
