//! Command dispatch and rendering

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use generational_arena::Index;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, ChartService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::config::{global_config_path, Settings, LOCAL_CONFIG_FILE};
use crate::domain::{DeptArena, Department};

pub fn execute_command(cli: &Cli) -> ApplicationResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    match &cli.command {
        Some(Commands::Tree { file }) => _tree(&settings, file),
        Some(Commands::Departments { file }) => _departments(&settings, file),
        Some(Commands::Members { file, dept }) => _members(&settings, file, dept),
        Some(Commands::Config { command }) => _config(&settings, command),
        Some(Commands::Completion { shell }) => {
            _completion(*shell);
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument(skip(settings))]
fn _tree(settings: &Settings, file: &Path) -> ApplicationResult<()> {
    let chart = ChartService::new(settings.clone()).build_chart(file)?;
    let root = chart.root().ok_or(ApplicationError::NoRoot)?;
    debug!(departments = chart.len(), depth = chart.depth(), "rendering chart");
    output::info(&render_subtree(&chart, root));
    Ok(())
}

fn render_subtree(chart: &DeptArena, idx: Index) -> Tree<String> {
    let Some(node) = chart.get(idx) else {
        return Tree::new(String::new());
    };
    let mut tree = Tree::new(node_label(node));
    for &child in &node.children {
        tree.push(render_subtree(chart, child));
    }
    tree
}

fn node_label(node: &Department) -> String {
    format!("{} ({} members)", node.name, node.member_count())
}

#[instrument(skip(settings))]
fn _departments(settings: &Settings, file: &Path) -> ApplicationResult<()> {
    let chart = ChartService::new(settings.clone()).build_chart(file)?;
    for (_, node) in chart.nodes() {
        output::info(&format!(
            "{}: {} staff, {} contractors",
            node.name,
            node.staff.len(),
            node.contractors.len()
        ));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _members(settings: &Settings, file: &Path, dept: &str) -> ApplicationResult<()> {
    let chart = ChartService::new(settings.clone()).build_chart(file)?;
    let idx = chart
        .lookup(dept)
        .ok_or_else(|| ApplicationError::UnknownDepartment(dept.to_string()))?;
    let Some(node) = chart.get(idx) else {
        return Err(ApplicationError::UnknownDepartment(dept.to_string()));
    };

    output::header(&node.name);
    for emp in &node.staff {
        output::detail(&format!("{}  {}  {}", emp.rank_key(), emp.name, emp.job));
    }
    if !node.contractors.is_empty() {
        output::header(&format!("Contractors ({})", node.contractors.len()));
        for emp in &node.contractors {
            output::detail(&format!("{}  {}  {}", emp.rank_key(), emp.name, emp.job));
        }
    }
    Ok(())
}

fn _config(settings: &Settings, command: &ConfigCommands) -> ApplicationResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init => {
            output::info(&Settings::default().to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::detail(&format!("global: {}", path.display())),
                None => output::warning("no global config directory available"),
            }
            output::detail(&format!("local: ./{}", LOCAL_CONFIG_FILE));
            Ok(())
        }
    }
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
