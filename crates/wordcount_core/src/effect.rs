use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RequestCount {
        request_id: crate::RequestId,
        path: PathBuf,
    },
    Hide,
}
