use crate::{AbstractCarFactory, CarFactory, Console, PatternError};

pub const NO_FACTORY_NOTICE: &str = "--- No factory provided ---";

/// Factory Method client. It depends only on the `CarFactory` abstraction,
/// so any concrete factory can be swapped in.
pub fn app_factory(factory: &dyn CarFactory, console: &dyn Console) -> Result<(), PatternError> {
    let car = factory.make_car();
    car.show_cost(console)
}

/// Abstract Factory client. An absent factory prints a notice and returns
/// early without touching any product.
pub fn app_car_factory(
    factory: Option<&dyn AbstractCarFactory>,
    console: &dyn Console,
) -> Result<(), PatternError> {
    let Some(factory) = factory else {
        tracing::warn!("abstract factory client called without a factory");
        return console.print_line(NO_FACTORY_NOTICE);
    };

    let mastodon = factory.create_mastodon();
    let rhino = factory.create_rhino();
    mastodon.use_gps(console)?;
    rhino.use_gps(console)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingConsole;
    use crate::factories::{abstract_car_factory, car_factory};
    use crate::{BodyStyle, CarKind, Mastodon, MastodonCarFactory, Rhino, RhinoCarFactory};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_hatchback_scenario() {
        let console = RecordingConsole::new();
        let factory = abstract_car_factory::create_factory(BodyStyle::Hatchback);
        app_car_factory(Some(factory.as_ref()), &console).unwrap();

        assert_eq!(
            console.lines(),
            vec!["[Hatchback] Mastodon GPS", "[Hatchback] Rhino GPS"]
        );
    }

    #[test]
    fn test_sedan_scenario() {
        let console = RecordingConsole::new();
        let factory = abstract_car_factory::create_factory(BodyStyle::Sedan);
        app_car_factory(Some(factory.as_ref()), &console).unwrap();

        assert_eq!(console.lines(), vec!["[Sedan] Mastodon GPS", "[Sedan] Rhino GPS"]);
    }

    #[test]
    fn test_mastodon_factory_method_scenario() {
        let console = RecordingConsole::new();
        let factory = car_factory::create_factory(CarKind::Mastodon);
        app_factory(factory.as_ref(), &console).unwrap();

        assert_eq!(console.lines(), vec!["Mastodon car cost is $100,000"]);
    }

    #[test]
    fn test_factories_are_interchangeable() {
        let console = RecordingConsole::new();
        app_factory(&MastodonCarFactory, &console).unwrap();
        app_factory(&RhinoCarFactory, &console).unwrap();

        assert_eq!(
            console.lines(),
            vec!["Mastodon car cost is $100,000", "Rhino car cost is $50,000"]
        );
    }

    #[test]
    fn test_absent_factory_prints_single_notice() {
        let console = RecordingConsole::new();
        app_car_factory(None, &console).unwrap();

        assert_eq!(console.lines(), vec![NO_FACTORY_NOTICE]);
    }

    #[derive(Default)]
    struct CountingFactory {
        mastodons: AtomicUsize,
        rhinos: AtomicUsize,
    }

    struct Silent;

    impl Mastodon for Silent {
        fn use_gps(&self, console: &dyn Console) -> Result<(), PatternError> {
            console.print_line("mastodon")
        }
    }

    impl Rhino for Silent {
        fn use_gps(&self, console: &dyn Console) -> Result<(), PatternError> {
            console.print_line("rhino")
        }
    }

    impl AbstractCarFactory for CountingFactory {
        fn create_mastodon(&self) -> Box<dyn Mastodon> {
            self.mastodons.fetch_add(1, Ordering::SeqCst);
            Box::new(Silent)
        }

        fn create_rhino(&self) -> Box<dyn Rhino> {
            self.rhinos.fetch_add(1, Ordering::SeqCst);
            Box::new(Silent)
        }
    }

    #[test]
    fn test_each_creation_method_called_once_in_order() {
        let factory = CountingFactory::default();
        let console = RecordingConsole::new();
        app_car_factory(Some(&factory), &console).unwrap();

        assert_eq!(factory.mastodons.load(Ordering::SeqCst), 1);
        assert_eq!(factory.rhinos.load(Ordering::SeqCst), 1);
        assert_eq!(console.lines(), vec!["mastodon", "rhino"]);
    }

    struct FailingConsole;

    impl Console for FailingConsole {
        fn print_line(&self, _line: &str) -> Result<(), PatternError> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
        }
    }

    #[test]
    fn test_output_failure_propagates() {
        let result = app_factory(&RhinoCarFactory, &FailingConsole);
        assert!(matches!(result, Err(PatternError::Io(_))));
    }
}
