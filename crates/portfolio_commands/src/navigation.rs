use std::rc::Rc;

use portfolio_content::{HomeDir, HomeItemKind};
use shell_contract::{ArgMode, CompletionRequest, Segment, ShellError, StyleClass};
use shell_engine::{CommandContext, CommandRegistration};

use crate::{
    cat::render_item,
    support::{complete_first_arg, descriptor, handler},
};

pub(crate) fn registrations() -> Vec<CommandRegistration> {
    vec![ls_registration(), cat_registration(), open_registration()]
}

fn is_cattable(kind: HomeItemKind) -> bool {
    matches!(
        kind,
        HomeItemKind::File
            | HomeItemKind::Bio
            | HomeItemKind::Link
            | HomeItemKind::Links
            | HomeItemKind::Projects
            | HomeItemKind::Education
    )
}

/// Prints the home entry `name`, or fails with a lookup error.
pub(crate) fn cat_file(context: &CommandContext, name: &str) -> Result<(), ShellError> {
    let item = context
        .home
        .resolve(name)
        .ok_or_else(|| ShellError::not_found(format!("cat: {name}: No such file")))?;
    render_item(context, name, item);
    Ok(())
}

/// Opens the alias `raw` (case-insensitive) through the URL opener.
pub(crate) fn open_target(context: &CommandContext, raw: &str) -> Result<(), ShellError> {
    let target = raw.to_lowercase();
    if target.is_empty() {
        let hint = if context.config.is_mobile {
            "see the suggestions for valid options"
        } else {
            "press Tab to see valid options"
        };
        return Err(ShellError::usage(format!("open: missing target ({hint})")));
    }

    let aliases = context.profile.open_aliases();
    let url = aliases
        .get(&target)
        .ok_or_else(|| ShellError::not_found(format!("open: unknown target \"{raw}\"")))?;
    context.print_line(
        vec![Segment::text("Opening: "), Segment::link(url.clone())],
        StyleClass::Muted,
    );
    // Rejections are already surfaced by the opener's notifier.
    let _ = context.open_url(url);
    Ok(())
}

fn ls_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "ls",
            "List files (only ~ supported)",
            "ls [path]",
            ArgMode::Optional,
        ),
        completion: None,
        handler: handler(|context, args| {
            let path = args.first().map_or(HomeDir::PATH, String::as_str);
            if path != HomeDir::PATH {
                return Err(ShellError::usage(
                    "ls: only \"~\" is supported in this tiny filesystem",
                ));
            }
            context.print_pre(&context.home.list_names().join("\n"), StyleClass::Ok);
            Ok(())
        }),
    }
}

fn cat_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("cat", "Print file contents", "cat <file>", ArgMode::Required),
        completion: Some(Rc::new(
            |context: &CommandContext, request: &CompletionRequest| {
                complete_first_arg(request, context.home.names_where(is_cattable))
            },
        )),
        handler: handler(|context, args| match args.first() {
            Some(name) => cat_file(context, name),
            None => Err(ShellError::usage("cat: missing file operand")),
        }),
    }
}

fn open_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("open", "Open link", "open <alias>", ArgMode::Required),
        completion: Some(Rc::new(
            |context: &CommandContext, request: &CompletionRequest| {
                complete_first_arg(request, context.profile.open_aliases().into_keys())
            },
        )),
        handler: handler(|context, args| {
            open_target(context, args.first().map_or("", String::as_str))
        }),
    }
}
