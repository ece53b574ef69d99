/*!
Datapoint records exchanged with the datapoints API.

Only the parts that carry a [`StatusCode`] are modeled here. The status
code itself, including its lenient wire decoding, lives in
[`datapoint_status`].
*/

mod datapoint;
mod options;

pub use datapoint::{Datapoint, DatapointValue, DatapointsInsertion, DatapointsResponse};
pub use datapoint_status::{Category, StatusCode};
pub use options::RetrieveOptions;
