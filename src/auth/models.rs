/// Who is playing. Built from a verified passcode and handed to the game controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthContext {
    pub username: String,
    /// Whether the account's email address was verified.
    pub verified: bool,
}
