use shell_contract::{ArgMode, StyleClass};
use shell_engine::CommandRegistration;

use crate::{
    navigation::{cat_file, open_target},
    support::{descriptor, handler},
};

/// What a content alias expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AliasTarget {
    Cat(&'static str),
    Open(&'static str),
}

struct Alias {
    name: &'static str,
    summary: &'static str,
    target: AliasTarget,
}

const ALIASES: [Alias; 8] = [
    Alias {
        name: "bio",
        summary: "Alias: cat bio.txt",
        target: AliasTarget::Cat("bio.txt"),
    },
    Alias {
        name: "projects",
        summary: "Alias: cat projects.txt",
        target: AliasTarget::Cat("projects.txt"),
    },
    Alias {
        name: "socials",
        summary: "Alias: cat socials.txt",
        target: AliasTarget::Cat("socials.txt"),
    },
    Alias {
        name: "contact",
        summary: "Alias: cat socials.txt",
        target: AliasTarget::Cat("socials.txt"),
    },
    Alias {
        name: "cv",
        summary: "Alias: open cv",
        target: AliasTarget::Open("cv"),
    },
    Alias {
        name: "skills",
        summary: "List my skills",
        target: AliasTarget::Cat("skills.txt"),
    },
    Alias {
        name: "education",
        summary: "List my education",
        target: AliasTarget::Cat("education.txt"),
    },
    Alias {
        name: "roles",
        summary: "List my roles and experience",
        target: AliasTarget::Cat("roles.txt"),
    },
];

pub(crate) fn registrations() -> Vec<CommandRegistration> {
    let mut registrations = vec![whoami_registration()];
    registrations.extend(ALIASES.iter().map(alias_registration));
    registrations
}

fn whoami_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor("whoami", "About me", "whoami", ArgMode::None),
        completion: None,
        handler: handler(|context, _| {
            let profile = &context.profile;
            context.print_text(
                format!("{} — {} ({})", profile.name, profile.role, profile.location),
                StyleClass::Ok,
            );
            Ok(())
        }),
    }
}

fn alias_registration(alias: &Alias) -> CommandRegistration {
    let target = alias.target;
    CommandRegistration {
        descriptor: descriptor(alias.name, alias.summary, alias.name, ArgMode::None),
        completion: None,
        handler: handler(move |context, _| match target {
            AliasTarget::Cat(file) => cat_file(context, file),
            AliasTarget::Open(key) => open_target(context, key),
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::Harness;

    #[test]
    fn whoami_prints_name_role_and_location() {
        let harness = Harness::new();
        assert_eq!(
            harness.output_of("whoami"),
            vec!["Bradley Watson — Software Engineer (Leeds, UK)"]
        );
    }

    #[test]
    fn aliases_match_their_expansion() {
        let harness = Harness::new();
        for (alias, expansion) in [
            ("bio", "cat bio.txt"),
            ("projects", "cat projects.txt"),
            ("socials", "cat socials.txt"),
            ("contact", "cat socials.txt"),
            ("skills", "cat skills.txt"),
            ("education", "cat education.txt"),
            ("roles", "cat roles.txt"),
        ] {
            assert_eq!(harness.output_of(alias), harness.output_of(expansion), "{alias}");
        }
    }

    #[test]
    fn cv_alias_opens_the_cv() {
        let harness = Harness::new();
        assert_eq!(
            harness.output_of("cv"),
            vec!["Opening: ./assets/cv.pdf"]
        );
        assert_eq!(harness.urls.opened().len(), 1);
        assert_eq!(harness.urls.opened()[0].0, "https://bwatson.uk/assets/cv.pdf");
    }

    #[test]
    fn alias_names_complete_without_trailing_space() {
        let harness = Harness::new();
        assert_eq!(harness.controller.autocomplete("who"), "whoami");
        assert_eq!(harness.controller.autocomplete("edu"), "education");
    }
}
