use matrix_fixture::{
    matrix::Matrix, rng::FixtureRng, writer::write_matrix_to,
};

fn main() {
    let mut rng = FixtureRng::new(0x123);

    let matrix = Matrix::sample(&mut rng, 8).unwrap();

    let mut out = std::io::stdout().lock();
    write_matrix_to(&matrix, &mut out).unwrap();
}
