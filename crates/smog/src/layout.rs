//! The force-based layout engine
//!
//! [`ForceLayout`] turns every node into a [`Particle`] and every edge into a
//! [`Spring`], then advances the particle system one time step per call to
//! [`ForceLayout::step`] until its kinetic energy settles below a threshold.

use std::collections::HashMap;

use log::{debug, trace};
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

use smog_core::{
    geometry::Vector,
    graph::{Edge, Node},
    particle::Particle,
    spring::Spring,
};

use crate::{
    bounds::Bounds,
    config::LayoutConfig,
    error::{Endpoint, SmogError},
    force::{Force, Repulsion, SpringForce},
};

/// The generic driving interface of a step-wise graph layout.
///
/// A driver calls [`init`](GraphLayout::init) once per graph, then
/// [`step`](GraphLayout::step) until it returns `false` or the driver's own
/// iteration cap is reached, and finally [`terminate`](GraphLayout::terminate).
pub trait GraphLayout<N, E> {
    /// Error raised when the graph cannot be loaded.
    type Error;

    /// Loads a graph, discarding any previous state.
    fn init(
        &mut self,
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<(), Self::Error>;

    /// Computes the next step. Returns whether more steps are needed.
    fn step(&mut self, time_step: f64) -> bool;

    /// Signals that the driver is done with the layout.
    fn terminate(&mut self);
}

/// A layout computed by simulating particles and springs.
pub trait PhysicalLayout<N, E>: GraphLayout<N, E> {
    /// The particles, one per node, in node order.
    fn particles(&self) -> &[Particle<N>];

    /// The springs, one per edge, in edge order.
    fn springs(&self) -> &[Spring<E>];
}

/// Lifecycle of a layout.
///
/// Nothing prevents stepping a terminated layout; `Terminated` only records
/// that the driver said it was done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutState {
    Uninitialized,
    Initialized,
    Stepping,
    Terminated,
}

/// Force-directed layout over a particle and spring system.
///
/// The layout owns its particles, springs, forces and random source. Forces
/// are applied in registration order; a freshly constructed layout has none.
///
/// # Examples
///
/// ```
/// use smog::{ForceLayout, config::LayoutConfig};
///
/// let config = LayoutConfig::default().with_seed(7);
/// let mut layout = ForceLayout::from_config(&config);
/// layout
///     .init(["a", "b", "c"], [("a", "b"), ("b", "c")])
///     .expect("edges reference known nodes");
///
/// let mut iterations = 0;
/// while layout.step(0.5) && iterations < 1000 {
///     iterations += 1;
/// }
///
/// for (node, position) in layout.positions() {
///     println!("{node}: ({:.2}, {:.2})", position.x(), position.y());
/// }
/// ```
pub struct ForceLayout<N, E, R = StdRng> {
    particles: Vec<Particle<N>>,
    springs: Vec<Spring<E>>,
    forces: Vec<Box<dyn Force<N, E>>>,
    threshold: f64,
    damping: f64,
    bounds: Bounds,
    enforce_bounds: bool,
    kinetic_energy: f64,
    steps: usize,
    state: LayoutState,
    rng: R,
}

impl<N, E> ForceLayout<N, E>
where
    N: Node,
    E: Edge<Node = N>,
{
    /// Creates a layout with no particles, no springs and no forces.
    ///
    /// The random source is seeded from [`LayoutConfig::seed`], or from the
    /// operating system when no seed is configured.
    pub fn new(config: &LayoutConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    /// Creates a layout and registers the forces selected by the configuration.
    pub fn from_config(config: &LayoutConfig) -> Self {
        let mut layout = Self::new(config);
        let forces = config.forces();
        if forces.repulsion() {
            layout.add_force(Repulsion::new(forces.repulsion_constant()));
        }
        if forces.spring() {
            layout.add_force(SpringForce::new());
        }
        layout
    }
}

impl<N, E> Default for ForceLayout<N, E>
where
    N: Node,
    E: Edge<Node = N>,
{
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl<N, E, R> ForceLayout<N, E, R>
where
    N: Node,
    E: Edge<Node = N>,
    R: RngCore,
{
    /// Creates a layout with no forces drawing randomness from `rng`.
    ///
    /// The seed in `config` is ignored.
    pub fn with_rng(config: &LayoutConfig, rng: R) -> Self {
        let mut layout = Self {
            particles: Vec::new(),
            springs: Vec::new(),
            forces: Vec::new(),
            threshold: config.threshold(),
            damping: config.damping(),
            bounds: Bounds::default(),
            enforce_bounds: false,
            kinetic_energy: 0.0,
            steps: 0,
            state: LayoutState::Uninitialized,
            rng,
        };
        if let Some(bounds) = config.bounds() {
            layout.set_bounds(bounds);
        }
        layout
    }

    /// Registers the default forces: repulsion, then springs.
    pub fn with_default_forces(mut self) -> Self {
        self.add_force(Repulsion::default());
        self.add_force(SpringForce::new());
        self
    }

    /// Appends a force, applied after the ones already registered.
    pub fn add_force<F>(&mut self, force: F) -> &mut Self
    where
        F: Force<N, E> + 'static,
    {
        debug!(force = force.name(); "Registering force");
        self.forces.push(Box::new(force));
        self
    }

    /// Names of the registered forces, in application order.
    pub fn force_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.forces.iter().map(|force| force.name())
    }

    /// Loads a graph, replacing every particle and spring.
    ///
    /// One particle is created per node at a random position in
    /// `[-0.5, 0.5)²`, then one spring per edge between the particles of its
    /// source and target.
    ///
    /// # Errors
    ///
    /// Returns [`SmogError::DuplicateNode`] if a node appears twice and
    /// [`SmogError::UnknownNode`] if an edge references a node that is not in
    /// `nodes`. The previous state is kept on error.
    pub fn init(
        &mut self,
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<(), SmogError> {
        let particles: Vec<Particle<N>> = nodes
            .into_iter()
            .map(|node| {
                let x = self.rng.random::<f64>() - 0.5;
                let y = self.rng.random::<f64>() - 0.5;
                Particle::new(Vector::new(x, y), node)
            })
            .collect();

        let mut attached: HashMap<&N, usize> = HashMap::with_capacity(particles.len());
        for (index, particle) in particles.iter().enumerate() {
            if attached.insert(particle.payload(), index).is_some() {
                return Err(SmogError::DuplicateNode { index });
            }
        }

        let springs = edges
            .into_iter()
            .enumerate()
            .map(|(index, edge)| -> Result<Spring<E>, SmogError> {
                let source = *attached
                    .get(edge.source())
                    .ok_or(SmogError::UnknownNode {
                        edge: index,
                        endpoint: Endpoint::Source,
                    })?;
                let target = *attached
                    .get(edge.target())
                    .ok_or(SmogError::UnknownNode {
                        edge: index,
                        endpoint: Endpoint::Target,
                    })?;
                Ok(Spring::new(source, target, edge))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            particles = particles.len(),
            springs = springs.len();
            "Layout initialized"
        );

        self.particles = particles;
        self.springs = springs;
        self.kinetic_energy = 0.0;
        self.steps = 0;
        self.state = LayoutState::Initialized;
        Ok(())
    }

    /// Marks the layout as terminated. Always succeeds.
    pub fn terminate(&mut self) {
        debug!(steps = self.steps; "Layout terminated");
        self.state = LayoutState::Terminated;
    }

    /// Advances the simulation by `time_step`.
    ///
    /// Applies every force, integrates velocities and positions, clamps
    /// positions into the bounds when enforced, and returns whether the total
    /// kinetic energy still exceeds the threshold.
    pub fn step(&mut self, time_step: f64) -> bool {
        for force in &self.forces {
            force.apply(&mut self.particles, &self.springs, &mut self.rng);
        }

        for particle in &mut self.particles {
            particle.integrate(time_step, self.damping);
        }

        if self.enforce_bounds {
            for particle in &mut self.particles {
                particle.set_position(self.bounds.clamp(particle.position()));
            }
        }

        self.kinetic_energy = self.particles.iter().map(Particle::kinetic_energy).sum();
        self.steps += 1;
        if self.state != LayoutState::Terminated {
            self.state = LayoutState::Stepping;
        }

        trace!(
            step = self.steps,
            kinetic_energy = self.kinetic_energy;
            "Step computed"
        );

        self.kinetic_energy > self.threshold
    }

    /// Sets the bounds from clockwise shorthand and tries to enforce them.
    ///
    /// See [`Bounds::from_clockwise`] for the accepted forms. Enforcement is
    /// only enabled when the resulting rectangle is valid. Any other number of
    /// values disables enforcement and leaves the previous bounds in place.
    ///
    /// The new rectangle is stored before enforcement is checked, so the check
    /// always sees the new sides. Checking first would test the previous
    /// rectangle and could enforce a degenerate one: `[10, 20, 30, 40]` is
    /// stored here but left unenforced because its top is below its bottom.
    pub fn set_bounds(&mut self, values: &[f64]) {
        match Bounds::from_clockwise(values) {
            Some(bounds) => {
                self.bounds = bounds;
                self.set_enforce_bounds(true);
            }
            None => self.enforce_bounds = false,
        }
        debug!(
            bounds:? = self.bounds.to_array(),
            enforced = self.enforce_bounds;
            "Bounds updated"
        );
    }

    /// Enables or disables bounds enforcement.
    ///
    /// Enabling is refused when the current bounds are not a valid rectangle.
    pub fn set_enforce_bounds(&mut self, enforce: bool) {
        self.enforce_bounds = enforce && self.bounds.is_valid();
    }

    /// Whether positions are clamped into the bounds after each step.
    pub fn enforce_bounds(&self) -> bool {
        self.enforce_bounds
    }

    /// The current bounds, enforced or not.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Kinetic energy threshold below which the layout is settled.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Global velocity damping.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Total kinetic energy computed by the last step.
    pub fn kinetic_energy(&self) -> f64 {
        self.kinetic_energy
    }

    /// Number of steps since the last [`init`](Self::init).
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// The particles, one per node, in node order.
    pub fn particles(&self) -> &[Particle<N>] {
        &self.particles
    }

    /// Moves the particle at `index`, keeping its velocity.
    ///
    /// Returns `false` if there is no such particle.
    pub fn set_position(&mut self, index: usize, position: Vector) -> bool {
        match self.particles.get_mut(index) {
            Some(particle) => {
                particle.set_position(position);
                true
            }
            None => false,
        }
    }

    /// The springs, one per edge, in edge order.
    pub fn springs(&self) -> &[Spring<E>] {
        &self.springs
    }

    /// Current position of every node.
    pub fn positions(&self) -> impl Iterator<Item = (&N, Vector)> + '_ {
        self.particles
            .iter()
            .map(|particle| (particle.payload(), particle.position()))
    }
}

impl<N, E, R> GraphLayout<N, E> for ForceLayout<N, E, R>
where
    N: Node,
    E: Edge<Node = N>,
    R: RngCore,
{
    type Error = SmogError;

    fn init(
        &mut self,
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<(), SmogError> {
        ForceLayout::init(self, nodes, edges)
    }

    fn step(&mut self, time_step: f64) -> bool {
        ForceLayout::step(self, time_step)
    }

    fn terminate(&mut self) {
        ForceLayout::terminate(self)
    }
}

impl<N, E, R> PhysicalLayout<N, E> for ForceLayout<N, E, R>
where
    N: Node,
    E: Edge<Node = N>,
    R: RngCore,
{
    fn particles(&self) -> &[Particle<N>] {
        &self.particles
    }

    fn springs(&self) -> &[Spring<E>] {
        &self.springs
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::config::ForcesConfig;

    fn seeded() -> LayoutConfig {
        LayoutConfig::default().with_seed(42)
    }

    #[test]
    fn test_new_layout_has_no_forces() {
        let layout: ForceLayout<&str, (&str, &str)> = ForceLayout::new(&seeded());
        assert_eq!(layout.force_names().count(), 0);
        assert_eq!(layout.state(), LayoutState::Uninitialized);
        assert_approx_eq!(f64, layout.threshold(), 0.1);
        assert_approx_eq!(f64, layout.damping(), 0.9);
    }

    #[test]
    fn test_from_config_registers_selected_forces() {
        let layout: ForceLayout<&str, (&str, &str)> = ForceLayout::from_config(&seeded());
        assert_eq!(
            layout.force_names().collect::<Vec<_>>(),
            vec!["repulsion", "spring"]
        );

        let config = seeded().with_forces(ForcesConfig::new(false, 0.05, true));
        let layout: ForceLayout<&str, (&str, &str)> = ForceLayout::from_config(&config);
        assert_eq!(layout.force_names().collect::<Vec<_>>(), vec!["spring"]);
    }

    #[test]
    fn test_init_creates_particles_and_springs() {
        let mut layout = ForceLayout::new(&seeded());
        layout
            .init(["a", "b", "c"], [("a", "b"), ("c", "a")])
            .unwrap();

        assert_eq!(layout.particles().len(), 3);
        assert_eq!(layout.springs().len(), 2);
        assert_eq!(layout.state(), LayoutState::Initialized);

        for spring in layout.springs() {
            let (source, target) = *spring.payload();
            assert_eq!(*layout.particles()[spring.source()].payload(), source);
            assert_eq!(*layout.particles()[spring.target()].payload(), target);
        }
    }

    #[test]
    fn test_init_places_particles_in_unit_square() {
        let mut layout: ForceLayout<u32, (u32, u32)> = ForceLayout::new(&seeded());
        layout.init(0..100, []).unwrap();

        for particle in layout.particles() {
            assert!((-0.5..0.5).contains(&particle.x()));
            assert!((-0.5..0.5).contains(&particle.y()));
            assert!(particle.velocity().is_zero());
            assert!(particle.force().is_zero());
        }
    }

    #[test]
    fn test_init_unknown_node_fails_and_keeps_state() {
        let mut layout = ForceLayout::new(&seeded());
        layout.init(["a", "b"], [("a", "b")]).unwrap();

        let err = layout.init(["x"], [("x", "y")]).unwrap_err();
        assert_eq!(
            err,
            SmogError::UnknownNode {
                edge: 0,
                endpoint: Endpoint::Target,
            }
        );
        assert_eq!(layout.particles().len(), 2);
        assert_eq!(layout.springs().len(), 1);

        let err = layout.init(["x"], [("y", "x")]).unwrap_err();
        assert_eq!(
            err,
            SmogError::UnknownNode {
                edge: 0,
                endpoint: Endpoint::Source,
            }
        );
    }

    #[test]
    fn test_init_duplicate_node_fails() {
        let mut layout: ForceLayout<&str, (&str, &str)> = ForceLayout::new(&seeded());
        let err = layout.init(["a", "b", "a"], []).unwrap_err();
        assert_eq!(err, SmogError::DuplicateNode { index: 2 });
        assert_eq!(layout.state(), LayoutState::Uninitialized);
    }

    #[test]
    fn test_step_without_init_is_settled() {
        let mut layout: ForceLayout<&str, (&str, &str)> =
            ForceLayout::from_config(&seeded());
        assert!(!layout.step(1.0));
        assert_approx_eq!(f64, layout.kinetic_energy(), 0.0);
    }

    #[test]
    fn test_spring_force_on_first_step() {
        let config = seeded()
            .with_damping(1.0)
            .with_forces(ForcesConfig::new(false, 0.0, true));
        let mut layout = ForceLayout::from_config(&config);
        layout.init(["a", "b"], [("a", "b")]).unwrap();
        assert!(layout.set_position(0, Vector::new(0.0, 0.0)));
        assert!(layout.set_position(1, Vector::new(5.0, 0.0)));

        // Force 4 on each end, v = 4 * 1² / 2 = 2
        assert!(layout.step(1.0));
        assert_approx_eq!(f64, layout.particles()[0].velocity().x(), 2.0);
        assert_approx_eq!(f64, layout.particles()[1].velocity().x(), -2.0);
        assert_approx_eq!(f64, layout.particles()[0].x(), 2.0);
        assert_approx_eq!(f64, layout.particles()[1].x(), 3.0);
        assert_approx_eq!(f64, layout.kinetic_energy(), 4.0);
        assert!(layout.particles()[0].force().is_zero());
    }

    #[test]
    fn test_set_position_out_of_range() {
        let mut layout: ForceLayout<&str, (&str, &str)> = ForceLayout::new(&seeded());
        layout.init(["a"], []).unwrap();
        assert!(!layout.set_position(1, Vector::zero()));
    }

    #[test]
    fn test_state_transitions() {
        let mut layout: ForceLayout<&str, (&str, &str)> = ForceLayout::new(&seeded());
        layout.init(["a"], []).unwrap();
        layout.step(1.0);
        assert_eq!(layout.state(), LayoutState::Stepping);
        assert_eq!(layout.steps(), 1);

        layout.terminate();
        assert_eq!(layout.state(), LayoutState::Terminated);
        layout.step(1.0);
        assert_eq!(layout.state(), LayoutState::Terminated);

        layout.init(["b"], []).unwrap();
        assert_eq!(layout.state(), LayoutState::Initialized);
        assert_eq!(layout.steps(), 0);
    }

    #[test]
    fn test_bounds_from_config() {
        let config = seeded().with_bounds(vec![1.0, 1.0, -1.0, -1.0]);
        let layout: ForceLayout<&str, (&str, &str)> = ForceLayout::new(&config);
        assert!(layout.enforce_bounds());
        assert_eq!(layout.bounds().to_array(), [1.0, 1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_set_enforce_bounds_is_vetoed_without_valid_bounds() {
        let mut layout: ForceLayout<&str, (&str, &str)> = ForceLayout::new(&seeded());
        layout.set_enforce_bounds(true);
        assert!(!layout.enforce_bounds());

        layout.set_bounds(&[3.0, 3.0, -3.0, -3.0]);
        layout.set_enforce_bounds(false);
        assert!(!layout.enforce_bounds());
        layout.set_enforce_bounds(true);
        assert!(layout.enforce_bounds());
    }
}
