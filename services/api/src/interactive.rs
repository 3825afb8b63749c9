use crate::cli::CatalogArgs;
use crate::form::{FormSelection, ALL_SENTINEL};
use crate::infra::load_shared_catalog;
use crate::session::{SearchSession, SubmitOutcome};
use crate::views::render_submission;
use dialoguer::{Confirm, Input, Select};
use internship_match::error::AppError;

pub(crate) fn run_interactive(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load_shared_catalog(args.catalog)?;
    let locations = with_all_option(catalog.locations());
    let sectors = with_all_option(catalog.sectors());
    let mut session = SearchSession::default();

    println!("Internship Matchmaker");
    println!("Find the internship that fits your skills.\n");

    loop {
        let skills: String = Input::new()
            .with_prompt("Your skills (e.g. Python, ML, Communication)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        let location = Select::new()
            .with_prompt("Preferred location")
            .items(&locations)
            .default(0)
            .interact()
            .map_err(prompt_error)?;
        let sector = Select::new()
            .with_prompt("Sector")
            .items(&sectors)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        let form = FormSelection::new(
            skills,
            Some(locations[location].clone()),
            Some(sectors[sector].clone()),
        );

        if let SubmitOutcome::Rejected(err) = session.submit(form, &catalog) {
            println!("warning: {err}");
        }

        if session.is_submitted() {
            if let Some(submission) = session.last() {
                println!();
                print!("{}", render_submission(submission));
            }
        }

        let again = Confirm::new()
            .with_prompt("Search again?")
            .default(true)
            .interact()
            .map_err(prompt_error)?;
        if !again {
            break;
        }
    }

    Ok(())
}

fn with_all_option(values: Vec<String>) -> Vec<String> {
    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(ALL_SENTINEL.to_string());
    options.extend(values);
    options
}

fn prompt_error(err: dialoguer::Error) -> AppError {
    AppError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        err.to_string(),
    ))
}
