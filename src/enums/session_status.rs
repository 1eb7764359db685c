/// Observable state of the analysis workflow. A finished submission always
/// returns to `Idle`; its outcome is carried separately by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Pending,
}
