use crate::{
    CarFactory, CarKind, Console, DemoConfig, DemoStep, FactoryVia, MastodonCarFactory,
    PatternError, RhinoCarFactory,
    application::drivers::{app_car_factory, app_factory},
    factories::Factories,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: usize,
    pub lines: usize,
}

/// Walks a `DemoConfig` and hands each step to the matching client.
///
/// Steps run in order. The first output failure stops the run.
pub struct DemoRunner<C>
where
    C: Console,
{
    console: CountingConsole<C>,
    factories: Factories,
}

impl<C> DemoRunner<C>
where
    C: Console,
{
    pub fn new(console: C) -> Self {
        Self {
            console: CountingConsole::new(console),
            factories: Factories::new(),
        }
    }

    pub fn console(&self) -> &C {
        &self.console.inner
    }

    pub fn run(&self, config: &DemoConfig) -> Result<RunSummary, PatternError> {
        config.validate()?;
        let before = self.console.count();

        for (index, step) in config.steps.iter().enumerate() {
            tracing::info!(step = index + 1, %step, "running demo step");
            self.run_step(step)?;
        }

        Ok(RunSummary {
            steps: config.steps.len(),
            lines: self.console.count() - before,
        })
    }

    pub fn run_step(&self, step: &DemoStep) -> Result<(), PatternError> {
        let console: &dyn Console = &self.console;
        match *step {
            DemoStep::FactoryMethod { car, via } => {
                let factory = self.car_factory(car, via);
                app_factory(factory.as_ref(), console)
            }
            DemoStep::AbstractFactory { style } => {
                let factory = style.map(|style| self.factories.family(style));
                app_car_factory(factory.as_deref(), console)
            }
        }
    }

    fn car_factory(&self, car: CarKind, via: FactoryVia) -> Box<dyn CarFactory> {
        match via {
            FactoryVia::Selector => self.factories.car(car),
            FactoryVia::Direct => match car {
                CarKind::Mastodon => Box::new(MastodonCarFactory),
                CarKind::Rhino => Box::new(RhinoCarFactory),
            },
        }
    }
}

/// Console wrapper that counts successfully printed lines.
struct CountingConsole<C> {
    inner: C,
    printed: AtomicUsize,
}

impl<C> CountingConsole<C> {
    fn new(inner: C) -> Self {
        Self {
            inner,
            printed: AtomicUsize::new(0),
        }
    }

    fn count(&self) -> usize {
        self.printed.load(Ordering::SeqCst)
    }
}

impl<C: Console> Console for CountingConsole<C> {
    fn print_line(&self, line: &str) -> Result<(), PatternError> {
        self.inner.print_line(line)?;
        self.printed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
