//! Default values for the Config struct.

pub fn default_directive() -> String {
    "lstinputlisting".to_string()
}

pub fn default_extensions() -> Vec<String> {
    vec!["tex".to_string()]
}

pub(crate) fn default_submodule() -> String {
    "code".to_string()
}

pub(crate) fn default_diff_context() -> u32 {
    1
}
