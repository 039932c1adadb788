//! # Egy Discovery CLI
//!
//! Terminal front-end for the Egy Discovery backend. Mounts one panel, fills
//! one of its forms from stdin prompts or a JSON file, applies the same
//! submit gate as the desktop client, and prints the outcome. With `--list`
//! it prints the backend's existing records instead, filtered by the draft.
//!
//! ```text
//! egy_cli <analysis|campaign|metric|accounting> [--from <draft.json>] [--list]
//!         [--base-url <url>]
//! ```
//!
//! Exit codes: 0 when a JSON body came back, 1 on transport/decode failure,
//! 2 when the draft fails its gate.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use tracing::info;

use egy_core::drafts::{CampaignEdit, Choice, InsightEdit, MetricEdit, TransactionEdit};
use egy_core::input::format_number;
use egy_core::{ApiClient, ClientConfig, Form, Navigator, Panel, PanelEdit, Resolution};

/// Log filter when `RUST_LOG` is unset; keeps the prompts readable
const CLI_LOG_DIRECTIVES: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "egy_cli",
    version,
    about = "Create Egy Discovery records from the terminal",
    long_about = None
)]
struct Cli {
    /// Form to fill and submit
    #[arg(value_enum)]
    form: FormArg,

    /// Load the draft from a JSON file instead of prompting
    #[arg(short, long = "from")]
    from: Option<PathBuf>,

    /// List existing records instead of submitting. Filters come from the
    /// draft loaded with --from, if any
    #[arg(short, long)]
    list: bool,

    /// Backend base URL (overrides EGY_API_BASE_URL)
    #[arg(short, long = "base-url")]
    base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormArg {
    Analysis,
    Campaign,
    Metric,
    Accounting,
}

impl From<FormArg> for Form {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Analysis => Form::Insight,
            FormArg::Campaign => Form::Campaign,
            FormArg::Metric => Form::Metric,
            FormArg::Accounting => Form::Transaction,
        }
    }
}

/// Ask for one value. Enter (or end of input) keeps the current value.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
    current: &str,
) -> Option<String> {
    write!(out, "{} [{}]: ", label, current).ok()?;
    out.flush().ok()?;

    let mut line = String::new();
    input.read_line(&mut line).ok()?;

    let line = line.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

/// Ask for one of a closed set of options by wire code
fn prompt_choice<T: Choice>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
    current: Option<T>,
) -> Option<T> {
    let codes: Vec<&str> = T::ALL.iter().map(|option| option.code()).collect();
    let label = format!("{} ({})", label, codes.join("/"));
    let raw = prompt(input, out, &label, current.map(|c| c.code()).unwrap_or(""))?;

    let choice = T::from_code(&raw);
    if choice.is_none() {
        // Unknown codes keep the current selection
        let _ = writeln!(out, "  unknown option '{}', keeping current", raw);
    }
    choice
}

/// Like [`prompt_choice`] for optional selections. `-` or `none` clears the
/// selection, which comes back as `Some(None)`.
fn prompt_optional_choice<T: Choice>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
    current: Option<T>,
) -> Option<Option<T>> {
    let codes: Vec<&str> = T::ALL.iter().map(|option| option.code()).collect();
    let label = format!("{} ({}, - to clear)", label, codes.join("/"));
    let raw = prompt(input, out, &label, current.map(|c| c.code()).unwrap_or(""))?;

    if raw == "-" || raw.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    match T::from_code(&raw) {
        Some(choice) => Some(Some(choice)),
        None => {
            let _ = writeln!(out, "  unknown option '{}', keeping current", raw);
            None
        }
    }
}

/// Walk a form's fields and collect the edits the user typed
fn prompt_edits(
    panel: &Panel,
    form: Form,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Vec<PanelEdit> {
    let mut edits = Vec::new();

    match (panel, form) {
        (Panel::Analysis(p), Form::Insight) => {
            let draft = &p.insight;
            let mut push = |edit| edits.push(PanelEdit::Insight(edit));
            if let Some(v) = prompt(input, out, "Topic", &draft.topic) {
                push(InsightEdit::Topic(v));
            }
            if let Some(v) = prompt(input, out, "ROAS", &format_number(draft.data.roas)) {
                push(InsightEdit::Roas(v));
            }
            if let Some(v) = prompt(input, out, "CTR", &format_number(draft.data.ctr)) {
                push(InsightEdit::Ctr(v));
            }
        }

        (Panel::Marketing(p), Form::Campaign) => {
            let draft = &p.campaign;
            let mut push = |edit| edits.push(PanelEdit::Campaign(edit));
            if let Some(v) = prompt_choice(input, out, "Platform", Some(draft.platform)) {
                push(CampaignEdit::Platform(v));
            }
            if let Some(v) = prompt(input, out, "Name", &draft.name) {
                push(CampaignEdit::Name(v));
            }
            if let Some(v) = prompt_choice(input, out, "Objective", Some(draft.objective)) {
                push(CampaignEdit::Objective(v));
            }
            let budget = format_number(draft.budget_daily);
            if let Some(v) = prompt(input, out, "Daily budget", &budget) {
                push(CampaignEdit::BudgetDaily(v));
            }
            if let Some(v) = prompt(input, out, "Start date", &draft.start_date) {
                push(CampaignEdit::StartDate(v));
            }
            if let Some(v) = prompt(input, out, "End date", &draft.end_date) {
                push(CampaignEdit::EndDate(v));
            }
        }

        (Panel::Marketing(p), Form::Metric) => {
            let draft = &p.metric;
            let mut push = |edit| edits.push(PanelEdit::Metric(edit));
            if let Some(v) = prompt(input, out, "Campaign ID", &draft.campaign_id) {
                push(MetricEdit::CampaignId(v));
            }
            if let Some(v) = prompt(input, out, "Date", &draft.date) {
                push(MetricEdit::Date(v));
            }
            if let Some(v) = prompt(input, out, "Impressions", &draft.impressions.to_string()) {
                push(MetricEdit::Impressions(v));
            }
            if let Some(v) = prompt(input, out, "Clicks", &draft.clicks.to_string()) {
                push(MetricEdit::Clicks(v));
            }
            if let Some(v) = prompt(input, out, "Spend", &format_number(draft.spend)) {
                push(MetricEdit::Spend(v));
            }
            if let Some(v) = prompt(input, out, "Conversions", &draft.conversions.to_string()) {
                push(MetricEdit::Conversions(v));
            }
            if let Some(v) = prompt(input, out, "Revenue", &format_number(draft.revenue)) {
                push(MetricEdit::Revenue(v));
            }
        }

        (Panel::Accounting(p), Form::Transaction) => {
            let draft = &p.transaction;
            let mut push = |edit| edits.push(PanelEdit::Transaction(edit));
            if let Some(v) = prompt(input, out, "Date", &draft.date) {
                push(TransactionEdit::Date(v));
            }
            if let Some(v) = prompt_choice(input, out, "Type", Some(draft.kind)) {
                push(TransactionEdit::Kind(v));
            }
            if let Some(v) = prompt_optional_choice(input, out, "Account", draft.account) {
                push(TransactionEdit::Account(v));
            }
            if let Some(v) = prompt(input, out, "Counterparty", &draft.counterparty) {
                push(TransactionEdit::Counterparty(v));
            }
            if let Some(v) = prompt_choice(input, out, "Currency", Some(draft.currency)) {
                push(TransactionEdit::Currency(v));
            }
            if let Some(v) = prompt(input, out, "Amount", &format_number(draft.amount)) {
                push(TransactionEdit::Amount(v));
            }
            if let Some(v) = prompt_optional_choice(input, out, "Category", draft.category) {
                push(TransactionEdit::Category(v));
            }
            if let Some(v) = prompt(input, out, "Description", &draft.description) {
                push(TransactionEdit::Description(v));
            }
        }

        _ => {}
    }

    edits
}

fn load_draft(panel: &mut Panel, form: Form, path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read draft file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse draft JSON: {}", path.display()))?;
    let loaded = panel
        .load(form, value)
        .with_context(|| format!("Draft in {} does not fit the {:?} form", path.display(), form))?;
    if !loaded {
        anyhow::bail!("The {:?} form is not on the {} page", form, panel.page());
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    egy_core::logging::init(CLI_LOG_DIRECTIVES);

    let cli = Cli::parse();
    let form = Form::from(cli.form);

    let config = match cli.base_url.as_deref() {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    let client = ApiClient::new(&config)?;
    info!(base_url = %config.base_url, ?form, "egy_cli starting");

    let mut navigator = Navigator::new();
    navigator.navigate(form.page());

    match cli.from.as_ref() {
        Some(path) => {
            let panel = navigator.panel_mut().context("No panel mounted")?;
            load_draft(panel, form, path)?;
        }
        None if cli.list => {}
        None => {
            println!("{} - {}", form.page(), form.action_label());
            println!("Press Enter to keep the value in brackets.");
            println!();

            let panel = navigator.panel().context("No panel mounted")?;
            let stdin = io::stdin();
            let edits = prompt_edits(panel, form, &mut stdin.lock(), &mut io::stdout());
            for edit in edits {
                navigator.edit(edit);
            }
        }
    }

    let panel = navigator.panel_mut().context("No panel mounted")?;
    if cli.list {
        println!("GET {}...", form.endpoint().path());
        let resolution = panel.list(form, &client).await;
        println!("{}", panel.workflow().outcome());
        return Ok(exit_code(resolution));
    }

    if !panel.can_submit(form) {
        println!("Submit disabled: requires {}", panel.missing(form).join(", "));
        return Ok(ExitCode::from(2));
    }

    println!();
    println!("{}...", form.endpoint());
    let resolution = panel.submit(form, &client).await;

    println!("{}", panel.workflow().outcome());

    Ok(exit_code(resolution))
}

fn exit_code(resolution: Option<Resolution>) -> ExitCode {
    match resolution {
        Some(Resolution::Failed) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egy_core::drafts::{Account, Category, Platform};
    use egy_core::Page;
    use std::io::Cursor;

    fn mounted(page: Page) -> Navigator {
        let mut nav = Navigator::new();
        nav.navigate(page);
        nav
    }

    #[test]
    fn test_form_arg_mapping() {
        assert_eq!(Form::from(FormArg::Analysis), Form::Insight);
        assert_eq!(Form::from(FormArg::Accounting), Form::Transaction);
        assert_eq!(Form::from(FormArg::Metric).page(), Page::Marketing);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "egy_cli",
            "campaign",
            "--from",
            "d.json",
            "--base-url",
            "http://x:1",
        ]);
        assert_eq!(cli.form, FormArg::Campaign);
        assert_eq!(cli.from, Some(PathBuf::from("d.json")));
        assert_eq!(cli.base_url.as_deref(), Some("http://x:1"));
        assert!(!cli.list);
    }

    #[test]
    fn test_cli_parses_list_flag() {
        let cli = Cli::parse_from(["egy_cli", "accounting", "--list"]);
        assert_eq!(cli.form, FormArg::Accounting);
        assert!(cli.list);
        assert_eq!(cli.from, None);
    }

    #[test]
    fn test_optional_choice_can_clear() {
        let mut input = Cursor::new("-
NONE
bank

nope
");
        let mut out = Vec::new();
        let current = Some(Account::Cash);
        assert_eq!(prompt_optional_choice(&mut input, &mut out, "Account", current), Some(None));
        assert_eq!(prompt_optional_choice(&mut input, &mut out, "Account", current), Some(None));
        assert_eq!(
            prompt_optional_choice(&mut input, &mut out, "Account", current),
            Some(Some(Account::Bank))
        );
        // Enter keeps, unknown keeps
        assert_eq!(prompt_optional_choice(&mut input, &mut out, "Account", current), None);
        assert_eq!(prompt_optional_choice(&mut input, &mut out, "Account", current), None);
        assert!(String::from_utf8(out).unwrap().contains("unknown option 'nope'"));
    }

    #[test]
    fn test_accounting_prompts_clear_selection() {
        let mut nav = mounted(Page::Accounting);
        nav.edit(PanelEdit::Transaction(TransactionEdit::Account(Some(Account::Bank))));
        nav.edit(PanelEdit::Transaction(TransactionEdit::Category(Some(Category::Rent))));

        let mut input = Cursor::new("

-



none

");
        let mut out = Vec::new();
        for edit in prompt_edits(nav.panel().unwrap(), Form::Transaction, &mut input, &mut out) {
            nav.edit(edit);
        }

        match nav.panel().unwrap() {
            Panel::Accounting(p) => {
                assert_eq!(p.transaction.account, None);
                assert_eq!(p.transaction.category, None);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_prompt_enter_keeps_default() {
        let mut input = Cursor::new("\n  Q4 Push \n");
        let mut out = Vec::new();
        assert_eq!(prompt(&mut input, &mut out, "Name", "x"), None);
        assert_eq!(prompt(&mut input, &mut out, "Name", "x"), Some("Q4 Push".to_string()));
        // End of input
        assert_eq!(prompt(&mut input, &mut out, "Name", "x"), None);
        assert!(String::from_utf8(out).unwrap().starts_with("Name [x]: "));
    }

    #[test]
    fn test_prompt_choice_by_code() {
        let mut input = Cursor::new("GOOGLE\nfacebook\n");
        let mut out = Vec::new();
        assert_eq!(
            prompt_choice(&mut input, &mut out, "Platform", Some(Platform::Meta)),
            Some(Platform::Google)
        );
        assert_eq!(prompt_choice(&mut input, &mut out, "Platform", Some(Platform::Meta)), None);
    }

    #[test]
    fn test_campaign_prompts_pass_gate() {
        let mut nav = mounted(Page::Marketing);
        let mut input = Cursor::new("\nQ4 Push\n\n250\n\n\n");
        let mut out = Vec::new();

        let edits = prompt_edits(nav.panel().unwrap(), Form::Campaign, &mut input, &mut out);
        assert_eq!(edits.len(), 2);
        for edit in edits {
            nav.edit(edit);
        }

        let panel = nav.panel().unwrap();
        assert!(panel.can_submit(Form::Campaign));
        match panel {
            Panel::Marketing(p) => assert_eq!(p.campaign.budget_daily, 250.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_accounting_defaults_fail_gate() {
        let mut nav = mounted(Page::Accounting);
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        let edits = prompt_edits(nav.panel().unwrap(), Form::Transaction, &mut input, &mut out);
        assert!(edits.is_empty());
        for edit in edits {
            nav.edit(edit);
        }

        let panel = nav.panel().unwrap();
        assert!(!panel.can_submit(Form::Transaction));
        assert_eq!(
            panel.missing(Form::Transaction),
            vec!["account", "non-zero amount", "category"]
        );
    }

    #[test]
    fn test_accounting_prompts_pick_options() {
        let mut nav = mounted(Page::Accounting);
        let mut input = Cursor::new("\n\nbank\nACME\n\n120.5\nrent\nOffice\n");
        let mut out = Vec::new();

        for edit in prompt_edits(nav.panel().unwrap(), Form::Transaction, &mut input, &mut out) {
            nav.edit(edit);
        }

        match nav.panel().unwrap() {
            Panel::Accounting(p) => {
                assert_eq!(p.transaction.account, Some(Account::Bank));
                assert_eq!(p.transaction.amount, 120.5);
                assert_eq!(p.transaction.counterparty, "ACME");
            }
            _ => unreachable!(),
        }
        assert!(nav.panel().unwrap().can_submit(Form::Transaction));
    }

    #[test]
    fn test_load_draft_from_file() {
        let name = format!("egy_cli_draft_{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        fs::write(&path, r#"{"name": "From File", "budget_daily": 10}"#).unwrap();

        let mut nav = mounted(Page::Marketing);
        load_draft(nav.panel_mut().unwrap(), Form::Campaign, &path).unwrap();
        fs::remove_file(&path).ok();

        match nav.panel().unwrap() {
            Panel::Marketing(p) => {
                assert_eq!(p.campaign.name, "From File");
                assert_eq!(p.campaign.platform, Platform::Meta);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_load_draft_for_other_page_fails() {
        let name = format!("egy_cli_other_page_{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        fs::write(&path, r#"{"topic": "Q3"}"#).unwrap();

        let mut nav = mounted(Page::Marketing);
        let result = load_draft(nav.panel_mut().unwrap(), Form::Insight, &path);
        fs::remove_file(&path).ok();

        let error = result.unwrap_err().to_string();
        assert!(error.contains("not on the Marketing page"), "{}", error);
    }
}
