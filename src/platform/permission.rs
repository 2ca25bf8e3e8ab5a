use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Permission {
    #[strum(to_string = "granted")]
    Granted,

    #[strum(to_string = "denied")]
    Denied,

    /// User was not asked yet
    #[strum(to_string = "undetermined", serialize = "default")]
    Undetermined,
}
