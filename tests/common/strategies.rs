use exhibitor_registration::models::{AccountInfo, ParticipationType};
use proptest::prelude::*;

/// Strategy for usernames made only of allowed characters
pub fn valid_username_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{3,50}"
}

/// Strategy for usernames carrying at least one forbidden character
pub fn invalid_username_strategy() -> impl Strategy<Value = String> {
    ("[A-Za-z0-9_-]{0,10}", "[ .@!#$%&*+=/]", "[A-Za-z0-9_-]{0,10}")
        .prop_map(|(head, bad, tail)| format!("{head}{bad}{tail}"))
}

/// Strategy for strings that are empty or whitespace only
pub fn blank_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,5}"
}

pub fn participation_type_strategy() -> impl Strategy<Value = Option<ParticipationType>> {
    prop::option::of(prop::sample::select(ParticipationType::ALL.to_vec()))
}

/// Strategy for arbitrary, possibly invalid, account bags
pub fn account_info_strategy() -> impl Strategy<Value = AccountInfo> {
    (
        "[ A-Za-z]{0,12}",
        "[ A-Za-z]{0,12}",
        "[a-z@. ]{0,16}",
        "[A-Za-z0-9_ -]{0,12}",
        "[A-Za-z0-9]{0,12}",
        "[A-Za-z0-9]{0,12}",
        participation_type_strategy(),
    )
        .prop_map(
            |(first_name, last_name, email, username, password, password_confirmation, participation_type)| {
                AccountInfo {
                    first_name,
                    last_name,
                    email,
                    username,
                    password,
                    password_confirmation,
                    participation_type,
                }
            },
        )
}

/// Strategy for step indices, mostly outside the wizard
pub fn step_index_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![Just(0), Just(5), -100i32..0, 5i32..100, 1i32..=4]
}
