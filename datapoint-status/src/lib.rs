/*!
Quality/status codes attached to time series datapoints.

A [`StatusCode`] is a packed 32-bit word following the OPC-UA status code
layout: a [`Category`] (severity plus sub-code) in the upper 16 bits and
a set of info bits below it. See [`bits`] for the exact layout.

There are three ways to build one:

* from a catalogue entry: `StatusCode::from(Category::BadSensorFailure)`,
* from a raw word with every layout rule checked: [`StatusCode::try_create`],
* from its textual symbol: [`StatusCode::parse`].

```
use datapoint_status::{Category, Limit, StatusCode};

let status: StatusCode = "BadSensorFailure, High".parse()?;
assert_eq!(status.category(), Some(Category::BadSensorFailure));
assert_eq!(status.limit(), Limit::High);
assert_eq!(status.to_string(), "BadSensorFailure, High");
assert_eq!(StatusCode::try_create(status.code())?, status);
# Ok::<(), datapoint_status::ValidationError>(())
```

With the `serde` feature, status codes (de)serialize in the JSON form used
by the datapoints API. Note that numeric codes from the wire are *not*
validated, see the `wire` module.
*/

pub mod bits;
mod category;
mod errors;
mod status_code;
mod symbol;
#[cfg(feature = "serde")]
mod wire;

pub use bits::Flags;
pub use category::Category;
pub use errors::ValidationError;
pub use status_code::{Limit, Severity, StatusCode, ValueType};
