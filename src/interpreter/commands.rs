//! Built-in command table
//!
//! Each command is a plain function over a [`CommandContext`]. The table is
//! built once and never changes while the interpreter runs. Usage problems
//! are reported as error lines by the handler itself; an `Err` return is
//! reserved for unexpected faults and is reported by the dispatcher.

use std::collections::BTreeMap;

use super::search::search_experience;
use super::ExternalAction;
use crate::dataset::render::{
    render_basic, render_contact, render_education, render_experience, render_skills,
};
use crate::dataset::CvDataset;
use crate::error::Result;
use crate::models::SessionState;
use crate::output::OutputSink;

/// Everything a handler may read or change
pub struct CommandContext<'a> {
    pub session: &'a mut SessionState,
    pub output: &'a mut dyn OutputSink,
    pub dataset: &'a CvDataset,
    pub actions: &'a mut Vec<ExternalAction>,
}

/// Command handler capability
pub type Handler = fn(&mut CommandContext<'_>, &[String]) -> Result<()>;

/// Sections accepted by `goto`
pub const GOTO_SECTIONS: &[&str] = &["about", "skills", "experience", "education"];

/// Name of the command exempt from auto-clear
pub const CLEAR_COMMAND: &str = "clear";

/// Mapping from command name to handler
#[derive(Clone)]
pub struct CommandTable {
    handlers: BTreeMap<&'static str, Handler>,
}

impl CommandTable {
    /// Table without any commands
    pub fn empty() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// The fixed command set
    pub fn builtin() -> Self {
        Self::empty()
            .with("help", help)
            .with("about", about)
            .with("basic", basic)
            .with("skills", skills)
            .with("experience", experience)
            .with("education", education)
            .with("contact", contact)
            .with(CLEAR_COMMAND, clear)
            .with("theme", theme)
            .with("ascii", ascii)
            .with("open", open)
            .with("download", download)
            .with("goto", goto)
            .with("search", search)
            .with("settings", settings)
            .with("autoclear", autoclear)
    }

    /// Add or replace a command while building the table
    pub fn with(mut self, name: &'static str, handler: Handler) -> Self {
        self.handlers.insert(name, handler);
        self
    }

    /// Look up a handler by its (already lowercased) name
    pub fn get(&self, name: &str) -> Option<Handler> {
        self.handlers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Command names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.handlers.keys()).finish()
    }
}

fn help(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<()> {
    ctx.output.print_block(&ctx.dataset.help);
    Ok(())
}

fn about(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<()> {
    ctx.output.print_block(&ctx.dataset.about);
    Ok(())
}

fn basic(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<()> {
    ctx.output.print_block(&render_basic(ctx.dataset));
    Ok(())
}

fn skills(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<()> {
    ctx.output.print_block(&render_skills(ctx.dataset));
    Ok(())
}

fn experience(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<()> {
    ctx.output.print_block(&render_experience(ctx.dataset));
    Ok(())
}

fn education(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<()> {
    ctx.output.print_block(&render_education(ctx.dataset));
    Ok(())
}

fn contact(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<()> {
    ctx.output.print_block(&render_contact(ctx.dataset));
    Ok(())
}

fn clear(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<()> {
    ctx.output.clear();
    Ok(())
}

fn theme(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<()> {
    ctx.session.theme = ctx.session.theme.toggled();
    debug!("Theme switched to {}", ctx.session.theme);
    Ok(())
}

fn ascii(ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<()> {
    ctx.output.print_block(&ctx.dataset.ascii);
    Ok(())
}

fn download_cv(ctx: &mut CommandContext<'_>) {
    ctx.actions
        .push(ExternalAction::Download(ctx.dataset.contact.cv_path.clone()));
}

fn open(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<()> {
    let Some(target) = args.first() else {
        ctx.output.print_error("Usage: open <linkedin|github|cv>");
        return Ok(());
    };
    match target.as_str() {
        "linkedin" => ctx
            .actions
            .push(ExternalAction::OpenUrl(ctx.dataset.contact.linkedin.clone())),
        "github" => ctx
            .actions
            .push(ExternalAction::OpenUrl(ctx.dataset.contact.github.clone())),
        "cv" => download_cv(ctx),
        other => ctx
            .output
            .print_error(&format!("Unknown target: {}", other)),
    }
    Ok(())
}

fn download(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<()> {
    if args.first().map(String::as_str) == Some("cv") {
        download_cv(ctx);
    } else {
        ctx.output.print_error("Usage: download cv");
    }
    Ok(())
}

fn goto(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<()> {
    match args.first() {
        // Sections are no longer part of the page; acknowledge only.
        Some(section) if GOTO_SECTIONS.contains(&section.as_str()) => {
            ctx.output.print(&format!("(scrolling to {})", section));
        }
        _ => ctx
            .output
            .print_error("Usage: goto <about|skills|experience|education>"),
    }
    Ok(())
}

fn search(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<()> {
    if args.is_empty() {
        ctx.output.print_error("Usage: search <keyword>");
        return Ok(());
    }
    let keyword = args.join(" ");
    ctx.output
        .print_block(&search_experience(ctx.dataset, &keyword));
    Ok(())
}

fn settings(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<()> {
    let Some(key) = args.first() else {
        ctx.output
            .print(&format!("autoClear = {}", ctx.session.auto_clear));
        return Ok(());
    };
    if key != "autoclear" {
        ctx.output.print_error("Unknown setting key");
        return Ok(());
    }
    match args.get(1).map(String::as_str) {
        Some("on") | Some("true") => {
            ctx.session.auto_clear = true;
            ctx.output.print("autoClear enabled");
        }
        Some("off") | Some("false") => {
            ctx.session.auto_clear = false;
            ctx.output.print("autoClear disabled");
        }
        _ => ctx
            .output
            .print_error("Usage: settings autoclear <on|off>"),
    }
    Ok(())
}

fn autoclear(ctx: &mut CommandContext<'_>, args: &[String]) -> Result<()> {
    ctx.session.auto_clear = match args.first().map(String::as_str) {
        None => !ctx.session.auto_clear,
        Some("on") => true,
        Some("off") => false,
        Some(_) => {
            ctx.output.print_error("Usage: autoclear [on|off]");
            return Ok(());
        }
    };
    ctx.output
        .print(&format!("autoClear -> {}", ctx.session.auto_clear));
    Ok(())
}
