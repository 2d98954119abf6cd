//! # events-service
//!
//! Application layer: turns event records into the JSON representations served
//! by the API, and the services that load records and apply them.

pub mod representation;
pub mod services;

pub use representation::{
    build_proposal_representer, flatten_proposal, format_speakers, ProposalRepresenter,
    Representation, RepresentationError, RequestContext,
};
pub use services::{
    EventService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
