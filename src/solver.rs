//! Greedy route construction over a cost source.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::traits::CostSource;

/// Index of the depot stop shared by every vehicle.
pub const DEPOT: usize = 0;

#[derive(Debug, Clone, PartialEq)]
pub enum AssignError {
    /// The fleet size was zero.
    NoVehicles,
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignError::NoVehicles => write!(f, "fleet must contain at least one vehicle"),
        }
    }
}

impl Error for AssignError {}

/// One vehicle's ordered visit sequence.
///
/// Starts at the depot and is only ever extended at the end, so the stop
/// order is the travel order. A route that never left the depot is a valid
/// outcome for a surplus vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRoute {
    stops: Vec<usize>,
    total_cost: f64,
}

impl VehicleRoute {
    fn depot_only() -> Self {
        Self {
            stops: vec![DEPOT],
            total_cost: 0.0,
        }
    }

    fn empty() -> Self {
        Self {
            stops: Vec::new(),
            total_cost: 0.0,
        }
    }

    fn push_stop(&mut self, stop: usize, leg_cost: f64) {
        self.stops.push(stop);
        self.total_cost += leg_cost;
    }

    /// The stop this vehicle is currently on (the last appended stop, or
    /// the depot for a route with no stops).
    pub fn frontier(&self) -> usize {
        self.stops.last().copied().unwrap_or(DEPOT)
    }

    /// The visited stops in travel order, depot first.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of stops on this route, depot included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// `true` only for routes produced from an empty cost source.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// `true` if the vehicle never left the depot.
    pub fn is_idle(&self) -> bool {
        self.stops.len() <= 1
    }

    /// Accumulated travel cost across this route's legs.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Consecutive stop pairs in travel order, one per leg.
    ///
    /// This is the shape in which the host turns a route back into
    /// real-world geometry, one leg at a time.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.stops.windows(2).map(|leg| (leg[0], leg[1]))
    }
}

/// The complete fleet assignment: one route per vehicle, positionally
/// aligned with vehicle order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    routes: Vec<VehicleRoute>,
}

impl Assignment {
    /// The per-vehicle routes, indexed by vehicle.
    pub fn routes(&self) -> &[VehicleRoute] {
        &self.routes
    }

    /// Fleet size this assignment was built for.
    pub fn num_vehicles(&self) -> usize {
        self.routes.len()
    }

    /// Non-depot stops served across the fleet.
    pub fn stops_served(&self) -> usize {
        self.routes
            .iter()
            .map(|route| route.len().saturating_sub(1))
            .sum()
    }

    /// Total travel cost across all routes.
    pub fn total_cost(&self) -> f64 {
        self.routes.iter().map(VehicleRoute::total_cost).sum()
    }

    /// Consumes the assignment and returns the owned routes.
    pub fn into_routes(self) -> Vec<VehicleRoute> {
        self.routes
    }
}

/// Assigns every non-depot stop to exactly one vehicle.
///
/// Builds the routes with a single greedy pass: each iteration scans every
/// vehicle's frontier (the last stop on its route) against every unvisited
/// stop and commits the globally cheapest extension. Assignments are never
/// revisited, and no balancing is attempted; balance only emerges from
/// always taking the cheapest available leg. The scan runs in ascending
/// vehicle index then ascending stop index with a strict comparison, so
/// ties go to the first pair encountered and identical inputs always give
/// identical output.
///
/// This is a construction heuristic, not an optimizer: it runs in O(K·N²)
/// and makes no claim about total tour length.
///
/// An empty cost source yields `vehicles` routes with no stops; a
/// depot-only source yields `vehicles` routes pinned at the depot. Surplus
/// vehicles keep depot-only routes.
///
/// # Errors
///
/// Returns [`AssignError::NoVehicles`] if `vehicles` is zero.
///
/// # Examples
///
/// ```
/// use vrp_assign::matrix::CostMatrix;
/// use vrp_assign::solver::assign;
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 5.0],
///     vec![1.0, 0.0, 2.0],
///     vec![5.0, 2.0, 0.0],
/// ])?;
///
/// let assignment = assign(&costs, 1)?;
/// assert_eq!(assignment.routes()[0].stops(), &[0, 1, 2]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn assign<C: CostSource>(costs: &C, vehicles: usize) -> Result<Assignment, AssignError> {
    if vehicles == 0 {
        return Err(AssignError::NoVehicles);
    }

    let n = costs.stops();
    if n == 0 {
        return Ok(Assignment {
            routes: vec![VehicleRoute::empty(); vehicles],
        });
    }

    debug!(stops = n, vehicles, "assigning stops to fleet");

    let mut routes = vec![VehicleRoute::depot_only(); vehicles];
    let mut visited = vec![false; n];
    visited[DEPOT] = true;
    let mut remaining = n - 1;

    while remaining > 0 {
        // Cheapest (vehicle, stop, leg cost) extension found this pass.
        let mut best: Option<(usize, usize, f64)> = None;

        for (vehicle, route) in routes.iter().enumerate() {
            let frontier = route.frontier();
            for stop in 0..n {
                if visited[stop] {
                    continue;
                }
                let cost = costs.cost(frontier, stop);
                if best.is_none_or(|(_, _, cheapest)| cost < cheapest) {
                    best = Some((vehicle, stop, cost));
                }
            }
        }

        let Some((vehicle, stop, cost)) = best else {
            break;
        };

        trace!(vehicle, stop, cost, "extending route");
        routes[vehicle].push_stop(stop, cost);
        visited[stop] = true;
        remaining -= 1;
    }

    let assignment = Assignment { routes };
    debug!(total_cost = assignment.total_cost(), "assignment complete");
    Ok(assignment)
}
