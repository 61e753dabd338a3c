use crate::ScanId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ProbeHealth,
    SubmitScan { scan_id: ScanId, url: String },
}
