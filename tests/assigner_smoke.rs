use vrp_assign::solver::assign;
use vrp_assign::traits::CostSource;

/// Manhattan costs computed on the fly, no materialized matrix.
struct GridCosts {
    points: Vec<(f64, f64)>,
}

impl CostSource for GridCosts {
    fn stops(&self) -> usize {
        self.points.len()
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        let (x1, y1) = self.points[from];
        let (x2, y2) = self.points[to];
        (x1 - x2).abs() + (y1 - y2).abs()
    }
}

#[test]
fn splits_grid_clusters_between_vehicles() {
    // Two clusters: one east of the depot, one north.
    let costs = GridCosts {
        points: vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 5.0), (0.0, 6.0)],
    };

    let assignment = assign(&costs, 2).unwrap();

    assert_eq!(assignment.routes()[0].stops(), &[0, 1, 2]);
    assert_eq!(assignment.routes()[1].stops(), &[0, 3, 4]);
    assert_eq!(assignment.routes()[0].total_cost(), 2.0);
    assert_eq!(assignment.routes()[1].total_cost(), 6.0);
    assert_eq!(assignment.stops_served(), 4);
}
