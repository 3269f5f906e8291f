/*!
# Graph Algorithms

General graph algorithms the planarity engine builds upon.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use uplanar::algo::*;
```
*/

mod biconnected;

use crate::prelude::*;

pub use biconnected::*;
