use std::rc::Rc;

use portfolio_host::local_date_string;
use shell_contract::{
    ArgMode, CompletionRequest, Segment, ShellError, StyleClass, Theme,
};
use shell_engine::{CommandContext, CommandRegistration};

use crate::support::{complete_first_arg, descriptor, handler};

const DESKTOP_TIP: &str =
    "Tips: use ↑/↓ for history and Tab for autocomplete (Shift+Tab to move focus).";
const MOBILE_TIP: &str =
    "Tip: tap a suggestion under the prompt to fill it in; recent commands show when it is empty.";
const THEME_CHOICES: [&str; 3] = ["dark", "light", "toggle"];

pub(crate) fn registrations() -> Vec<CommandRegistration> {
    vec![
        help_registration(),
        clear_registration(),
        date_registration(),
        echo_registration(),
        history_registration(),
        theme_registration(),
    ]
}

fn help_row(name: &str, summary: &str, usage: &str) -> String {
    format!("{name:<12} {summary:<32} {usage}")
}

fn help_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("help", "Show this help", "help", ArgMode::None),
        completion: None,
        handler: handler(|context, _| {
            context.print_line(
                vec![Segment::span(StyleClass::Accent, "Available commands")],
                StyleClass::Ok,
            );

            let mut lines = vec![help_row("COMMAND", "SUMMARY", "USAGE"), String::new()];
            lines.extend(
                context
                    .descriptors
                    .iter()
                    .filter(|descriptor| descriptor.is_public())
                    .map(|descriptor| {
                        help_row(&descriptor.name, &descriptor.summary, &descriptor.usage)
                    }),
            );
            lines.push(String::new());
            lines.push(
                if context.config.is_mobile {
                    MOBILE_TIP
                } else {
                    DESKTOP_TIP
                }
                .to_string(),
            );
            context.print_pre(&lines.join("\n"), StyleClass::Ok);
            Ok(())
        }),
    }
}

fn clear_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("clear", "Clear the screen", "clear", ArgMode::None),
        completion: None,
        handler: handler(|context, _| {
            context.clear();
            Ok(())
        }),
    }
}

fn date_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("date", "Print local date/time", "date", ArgMode::None),
        completion: None,
        handler: handler(|context, _| {
            context.print_text(local_date_string(), StyleClass::Muted);
            Ok(())
        }),
    }
}

fn echo_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("echo", "Print args", "echo <text>", ArgMode::Optional),
        completion: None,
        handler: handler(|context, args| {
            context.print_text(args.join(" "), StyleClass::Ok);
            Ok(())
        }),
    }
}

fn history_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "history",
            "Show command history",
            "history",
            ArgMode::None,
        ),
        completion: None,
        handler: handler(|context, _| {
            if context.history.is_empty() {
                context.print_text("no command history", StyleClass::Muted);
                return Ok(());
            }
            let listing = context
                .history
                .iter()
                .enumerate()
                .map(|(index, line)| format!("{:>4}  {line}", index + 1))
                .collect::<Vec<_>>()
                .join("\n");
            context.print_pre(&listing, StyleClass::Ok);
            Ok(())
        }),
    }
}

fn theme_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "theme",
            "Switch theme",
            "theme [dark|light|toggle]",
            ArgMode::Optional,
        ),
        completion: Some(Rc::new(
            |_: &CommandContext, request: &CompletionRequest| {
                complete_first_arg(request, THEME_CHOICES)
            },
        )),
        handler: handler(|context, args| {
            let next = args.first().map(|arg| arg.to_lowercase()).unwrap_or_default();
            let theme = context.theme();

            if next.is_empty() {
                context.print_text(
                    format!("theme: current is \"{}\"", theme.get()),
                    StyleClass::Muted,
                );
                context.print_text(
                    "Try: theme dark | theme light | theme toggle",
                    StyleClass::Muted,
                );
                return Ok(());
            }

            if next == "toggle" {
                theme.toggle();
            } else {
                let requested = next
                    .parse::<Theme>()
                    .map_err(|_| ShellError::usage("theme: expected \"dark\" or \"light\""))?;
                theme.set(requested);
            }
            context.print_text(
                format!("theme: set to \"{}\"", theme.get()),
                StyleClass::Muted,
            );
            Ok(())
        }),
    }
}
