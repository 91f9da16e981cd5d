use lamella::precision::{Precision, RealScalar};
use lamella::problem::Problem;
use lamella::settings::{self, Settings};

fn main() {
    env_logger::init();
    let settings = settings::load_config().unwrap();

    match settings.precision {
        Precision::Single => run::<f32>(settings),
        Precision::Double => run::<f64>(settings),
    }
}

fn run<T: RealScalar>(settings: Settings) {
    let mut problem = Problem::<T>::new(settings).unwrap();
    problem.solve().unwrap();
    problem.writeup().unwrap();
}
