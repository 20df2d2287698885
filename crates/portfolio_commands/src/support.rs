use std::{collections::BTreeSet, rc::Rc};

use shell_contract::{ArgMode, CommandDescriptor, CompletionRequest, ShellError};
use shell_engine::{CommandContext, CommandHandler, HandlerFuture};

pub(crate) fn descriptor(
    name: &str,
    summary: &str,
    usage: &str,
    arg_mode: ArgMode,
) -> CommandDescriptor {
    CommandDescriptor::new(name, summary, usage).with_arg_mode(arg_mode)
}

/// Wraps a synchronous command body as an async handler.
pub(crate) fn handler<F>(body: F) -> CommandHandler
where
    F: Fn(&CommandContext, &[String]) -> Result<(), ShellError> + 'static,
{
    let body = Rc::new(body);
    Rc::new(move |context: CommandContext, args: Vec<String>| -> HandlerFuture {
        let body = body.clone();
        Box::pin(async move { body(&context, &args) })
    })
}

/// Candidates for the first argument matching the request prefix, case-insensitively.
pub(crate) fn complete_first_arg<I, S>(request: &CompletionRequest, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    if request.arg_index != 0 {
        return Vec::new();
    }
    let prefix = request.prefix.to_lowercase();
    candidates
        .into_iter()
        .map(Into::into)
        .filter(|candidate: &String| candidate.to_lowercase().starts_with(&prefix))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn request(arg_index: usize, prefix: &str) -> CompletionRequest {
        CompletionRequest {
            line: String::new(),
            tokens: Vec::new(),
            args: Vec::new(),
            ends_with_whitespace: false,
            arg_index,
            prefix: prefix.to_string(),
        }
    }

    #[test]
    fn first_argument_candidates_are_sorted_and_unique() {
        assert_eq!(
            complete_first_arg(&request(0, "G"), ["linkedin", "github", "github"]),
            vec!["github"]
        );
        assert_eq!(
            complete_first_arg(&request(0, ""), ["toggle", "dark"]),
            vec!["dark", "toggle"]
        );
    }

    #[test]
    fn later_arguments_get_no_candidates() {
        assert!(complete_first_arg(&request(1, ""), ["dark"]).is_empty());
    }
}
