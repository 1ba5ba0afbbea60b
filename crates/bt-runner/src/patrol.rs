//! Demo world: a guard walking a fixed route and resting when exhausted.

use behavior_tree::{
    BehaviorTree, Blackboard, Builder, Clock, ManualClock, Result, Status, Tick, TreeConfig,
};

use crate::Host;

const WAYPOINTS: [i64; 4] = [0, 6, 2, 9];
const MAX_STAMINA: i64 = 8;
const REST_TICKS: Tick = 3;

#[derive(Debug, Default)]
pub struct Patrol {
    clock: ManualClock,
    pub board: Blackboard,
    pub position: i64,
    pub stamina: i64,
}

impl Patrol {
    pub fn new() -> Self {
        Self {
            stamina: MAX_STAMINA,
            ..Self::default()
        }
    }

    /// Completed legs of the route.
    pub fn legs(&self) -> i64 {
        self.board.get_or("legs", 0i64)
    }

    pub fn target(&self) -> i64 {
        let leg = self.legs().rem_euclid(WAYPOINTS.len() as i64) as usize;
        WAYPOINTS[leg]
    }
}

impl Clock for Patrol {
    fn now(&self) -> Tick {
        self.clock.now()
    }
}

impl Host for Patrol {
    fn advance(&mut self) {
        self.clock.advance(1);
    }
}

/// Moves one tile toward the current waypoint per tick.
fn walk(patrol: &mut Patrol) -> Status {
    let target = patrol.target();
    if patrol.position == target {
        return Status::Success;
    }
    if patrol.stamina <= 0 {
        return Status::Failure;
    }

    patrol.position += (target - patrol.position).signum();
    patrol.stamina -= 1;

    if patrol.position == target {
        Status::Success
    } else {
        // Wait for the next pulse before taking another step.
        Status::Sleeping
    }
}

/// Builds the patrol tree: rest when exhausted, otherwise walk the route.
pub fn patrol_tree(config: TreeConfig) -> Result<BehaviorTree<Patrol>> {
    Builder::<Patrol>::with_config(config)
        .selector()
        .sequence()
        .condition_named("exhausted", |patrol: &mut Patrol| patrol.stamina <= 0)
        .log_info("guard is resting")
        .sleep(REST_TICKS)
        .succeed_with(|patrol: &mut Patrol| patrol.stamina = MAX_STAMINA)
        .end()
        .sequence()
        .action_named("walk", walk)
        .log_info_with(|patrol: &Patrol| {
            format!("reached waypoint {} at tick {}", patrol.position, patrol.now())
        })
        .succeed_with(|patrol: &mut Patrol| {
            let legs = patrol.legs();
            patrol.board.set("legs", legs + 1);
        })
        .end()
        .end()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(tree: &mut BehaviorTree<Patrol>, patrol: &mut Patrol) -> Status {
        patrol.advance();
        tree.run(patrol)
    }

    #[test]
    fn walks_to_first_waypoints() {
        let mut tree = patrol_tree(TreeConfig::default()).expect("patrol tree should build");
        let mut patrol = Patrol::new();

        // Already standing on waypoint 0.
        assert_eq!(step(&mut tree, &mut patrol), Status::Success);
        assert_eq!(patrol.legs(), 1);
        assert_eq!(patrol.target(), 6);

        for _ in 0..5 {
            assert_eq!(step(&mut tree, &mut patrol), Status::Sleeping);
        }
        assert_eq!(step(&mut tree, &mut patrol), Status::Success);
        assert_eq!(patrol.position, 6);
        assert_eq!(patrol.legs(), 2);
        assert_eq!(patrol.stamina, MAX_STAMINA - 6);
    }

    #[test]
    fn rests_when_exhausted() {
        let mut tree = patrol_tree(TreeConfig::default()).expect("patrol tree should build");
        let mut patrol = Patrol::new();
        patrol.stamina = 0;
        patrol.board.set("legs", 1i64);

        // Fresh evaluation: exhaustion is noticed and the rest begins.
        assert_eq!(step(&mut tree, &mut patrol), Status::Sleeping);
        assert_eq!(step(&mut tree, &mut patrol), Status::Sleeping);
        assert_eq!(step(&mut tree, &mut patrol), Status::Sleeping);
        assert_eq!(step(&mut tree, &mut patrol), Status::Success);
        assert_eq!(patrol.stamina, MAX_STAMINA);
        assert_eq!(patrol.position, 0);
    }
}
