mod connectivity;
mod cycle;
mod dijkstra;
mod distance;

pub use connectivity::{is_connected, IsConnected};
pub use cycle::{contains_cycle, ContainsCycle};
pub use dijkstra::{shortest_distances, Dijkstra};
pub use distance::Distance;
