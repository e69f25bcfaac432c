/// Even-odd point classification against an outline
pub mod classification;
/// Closing drawn paths against claimed regions
pub mod closing;
/// Breadth-first region growing and outline extraction
pub mod growth;
/// Boundary projection from the four cardinal sides
pub mod projection;
/// Claim lifecycle over an occupancy oracle
pub mod session;
/// Interior fill strategies
pub mod strategy;
