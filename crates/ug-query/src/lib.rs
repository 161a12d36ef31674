//! Read-only queries over a transit network model.
//!
//! Every query borrows the model immutably and allocates its own working
//! state, so a fully built model can be shared between any number of
//! concurrent callers.
//!
//! # Example
//!
//! ```
//! use ug_model::Model;
//! use ug_query::{most_interchanges, shortest_route};
//!
//! let mut model = Model::new();
//! model.add_station("A", "North", [1]).unwrap();
//! model.add_station("B", "Centre", [1]).unwrap();
//! model.add_station("C", "South", [2]).unwrap();
//! model.add_station_to_line("A", "L1").unwrap();
//! model.add_station_to_line("B", "L1").unwrap();
//! model.add_station_to_line("B", "L2").unwrap();
//! model.add_station_to_line("C", "L2").unwrap();
//!
//! let busiest = most_interchanges(&model).unwrap();
//! assert_eq!((busiest.count, busiest.names), (2, vec!["B".to_string()]));
//!
//! let route = shortest_route(&model, "A", "C").unwrap();
//! assert_eq!(route.len(), 2);
//! assert_eq!(route[1].line, "L2");
//! ```

pub mod aggregate;
pub mod error;
pub mod listing;
pub mod route;

pub use aggregate::{Extremum, longest_line, most_interchanges};
pub use error::{QueryError, QueryResult};
pub use listing::{line_stations, station_interchanges};
pub use route::{JourneySegment, RouteConfig, shortest_route, shortest_route_with_config};
