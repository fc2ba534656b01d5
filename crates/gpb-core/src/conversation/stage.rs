use crate::{
    domain::FileRef,
    messaging::types::{parse_command, Content},
    texts,
};

/// Where a chat is in the payout-request flow.
///
/// Each waiting stage carries what was collected before it, so a wallet can
/// only ever be accepted once link and screenshot exist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Idle,
    WaitingForLink,
    WaitingForScreenshot {
        link: String,
    },
    WaitingForWallet {
        link: String,
        screenshot: FileRef,
    },
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::WaitingForLink => "waiting_for_link",
            Stage::WaitingForScreenshot { .. } => "waiting_for_screenshot",
            Stage::WaitingForWallet { .. } => "waiting_for_wallet",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    GetId,
    Status,
    Help,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Self::Start),
            "getid" => Some(Self::GetId),
            "status" => Some(Self::Status),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Incoming message reduced to what routing cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    MenuButton,
    Text(String),
    Photo(FileRef),
    Other,
}

impl Input {
    /// Unknown `/commands` are plain text; so is text that only looks like one.
    pub fn classify(content: &Content) -> Self {
        match content {
            Content::Command { name, args } => match Command::from_name(name) {
                Some(cmd) => Input::Command(cmd),
                None => Input::Text(rebuild_command(name, args)),
            },
            Content::Text(text) => {
                if text.trim() == texts::MENU_BUTTON {
                    return Input::MenuButton;
                }
                match parse_command(text).and_then(|(name, _)| Command::from_name(&name)) {
                    Some(cmd) => Input::Command(cmd),
                    None => Input::Text(text.clone()),
                }
            }
            Content::Photo(file) => Input::Photo(file.clone()),
            Content::Other => Input::Other,
        }
    }
}

fn rebuild_command(name: &str, args: &str) -> String {
    if args.is_empty() {
        format!("/{name}")
    } else {
        format!("/{name} {args}")
    }
}

/// What to do with a message, decided from `(stage, input)` alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    ShowMenu,
    GetId,
    Status,
    Help,
    Begin,
    AcceptLink(String),
    RejectLink,
    AcceptScreenshot {
        link: String,
        screenshot: FileRef,
    },
    RejectScreenshot,
    SubmitWallet {
        link: String,
        screenshot: FileRef,
        wallet: String,
    },
    RejectWallet,
    Unrecognized,
}

/// The dispatch table.
///
/// Commands and the menu button are answered in every stage; everything else
/// depends on the stage. A `/getid` sent mid-flow is answered, never taken as
/// the link or the wallet.
pub fn route(stage: &Stage, input: Input) -> Route {
    match (stage, input) {
        (_, Input::Command(Command::Start)) => Route::ShowMenu,
        (_, Input::Command(Command::GetId)) => Route::GetId,
        (_, Input::Command(Command::Status)) => Route::Status,
        (_, Input::Command(Command::Help)) => Route::Help,
        (_, Input::MenuButton) => Route::Begin,

        (Stage::Idle, _) => Route::Unrecognized,

        (Stage::WaitingForLink, Input::Text(text)) => Route::AcceptLink(text),
        (Stage::WaitingForLink, _) => Route::RejectLink,

        (Stage::WaitingForScreenshot { link }, Input::Photo(screenshot)) => {
            Route::AcceptScreenshot {
                link: link.clone(),
                screenshot,
            }
        }
        (Stage::WaitingForScreenshot { .. }, _) => Route::RejectScreenshot,

        (Stage::WaitingForWallet { link, screenshot }, Input::Text(wallet)) => {
            Route::SubmitWallet {
                link: link.clone(),
                screenshot: screenshot.clone(),
                wallet,
            }
        }
        (Stage::WaitingForWallet { .. }, _) => Route::RejectWallet,
    }
}

/// TON user-friendly addresses start with `UQ` (non-bounceable) or `EQ`
/// (bounceable). Nothing beyond the prefix is checked.
pub fn has_wallet_prefix(wallet: &str) -> bool {
    wallet.starts_with("UQ") || wallet.starts_with("EQ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> FileRef {
        FileRef("AgAC".to_string())
    }

    fn all_stages() -> Vec<Stage> {
        vec![
            Stage::Idle,
            Stage::WaitingForLink,
            Stage::WaitingForScreenshot {
                link: "l".to_string(),
            },
            Stage::WaitingForWallet {
                link: "l".to_string(),
                screenshot: photo(),
            },
        ]
    }

    #[test]
    fn classify_recognizes_button_and_commands() {
        assert_eq!(
            Input::classify(&Content::Text(texts::MENU_BUTTON.to_string())),
            Input::MenuButton
        );
        assert_eq!(
            Input::classify(&Content::Command {
                name: "getid".to_string(),
                args: String::new()
            }),
            Input::Command(Command::GetId)
        );
        assert_eq!(
            Input::classify(&Content::Text("/help@payout_bot".to_string())),
            Input::Command(Command::Help)
        );
    }

    #[test]
    fn unknown_commands_become_text() {
        assert_eq!(
            Input::classify(&Content::Command {
                name: "foo".to_string(),
                args: "bar".to_string()
            }),
            Input::Text("/foo bar".to_string())
        );
        assert_eq!(
            Input::classify(&Content::Text("/foo".to_string())),
            Input::Text("/foo".to_string())
        );
    }

    #[test]
    fn commands_and_button_route_the_same_in_every_stage() {
        for stage in all_stages() {
            assert_eq!(route(&stage, Input::Command(Command::Start)), Route::ShowMenu);
            assert_eq!(route(&stage, Input::Command(Command::GetId)), Route::GetId);
            assert_eq!(route(&stage, Input::Command(Command::Status)), Route::Status);
            assert_eq!(route(&stage, Input::Command(Command::Help)), Route::Help);
            assert_eq!(route(&stage, Input::MenuButton), Route::Begin);
        }
    }

    #[test]
    fn idle_does_not_accept_flow_input() {
        let idle = Stage::Idle;
        assert_eq!(route(&idle, Input::Text("hi".to_string())), Route::Unrecognized);
        assert_eq!(route(&idle, Input::Photo(photo())), Route::Unrecognized);
        assert_eq!(route(&idle, Input::Other), Route::Unrecognized);
    }

    #[test]
    fn each_waiting_stage_accepts_only_its_input_kind() {
        let [_, link, shot, wallet]: [Stage; 4] = all_stages().try_into().unwrap();

        assert_eq!(
            route(&link, Input::Text("t.me/nft/x".to_string())),
            Route::AcceptLink("t.me/nft/x".to_string())
        );
        assert_eq!(route(&link, Input::Photo(photo())), Route::RejectLink);
        assert_eq!(route(&link, Input::Other), Route::RejectLink);

        assert_eq!(
            route(&shot, Input::Photo(photo())),
            Route::AcceptScreenshot {
                link: "l".to_string(),
                screenshot: photo()
            }
        );
        assert_eq!(route(&shot, Input::Text("x".to_string())), Route::RejectScreenshot);
        assert_eq!(route(&shot, Input::Other), Route::RejectScreenshot);

        assert_eq!(
            route(&wallet, Input::Text("UQ1".to_string())),
            Route::SubmitWallet {
                link: "l".to_string(),
                screenshot: photo(),
                wallet: "UQ1".to_string()
            }
        );
        assert_eq!(route(&wallet, Input::Photo(photo())), Route::RejectWallet);
        assert_eq!(route(&wallet, Input::Other), Route::RejectWallet);
    }

    #[test]
    fn wallet_prefix_check() {
        assert!(has_wallet_prefix("UQBvW8Z5huBkMJYdnfAEM5JqTNkuWX3diqYENkWsIL0XggGG"));
        assert!(has_wallet_prefix("EQ"));
        assert!(!has_wallet_prefix("uq123"));
        assert!(!has_wallet_prefix("0:abcd"));
        assert!(!has_wallet_prefix(""));
    }
}
