//! Share targets for the share command

/// Something that can receive a shared link (a host share sheet, a chat hook)
pub trait ShareTarget {
    fn share(&mut self, title: &str, text: &str, url: &str) -> Result<(), String>;
}

/// Target that records every share it receives
#[derive(Debug, Default)]
pub struct RecordingShareTarget {
    pub shared: Vec<(String, String, String)>,
}

impl ShareTarget for RecordingShareTarget {
    fn share(&mut self, title: &str, text: &str, url: &str) -> Result<(), String> {
        self.shared
            .push((title.to_string(), text.to_string(), url.to_string()));
        Ok(())
    }
}
