use argh::FromArgs;
use crux::algebra::{Matrix3D, Vector3D};

#[derive(FromArgs)]
/// Run a few 3x3 matrix and 3D vector operations and print the results.
struct Args {
    /// fill value for the left hand matrix
    #[argh(option, short = 'f', default = "1.0")]
    fill: f32,

    /// scalar used for the scale and divide operations
    #[argh(option, short = 's', default = "2.0")]
    scalar: f32,

    /// also print the vector operations
    #[argh(switch, short = 'v')]
    vectors: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let left = Matrix3D::splat(args.fill);
    let grid: Vec<Vec<f32>> = vec![
        vec![4.0, 5.0, 6.0],
        vec![6.0, 5.0, 4.0],
        vec![4.0, 6.0, 5.0],
    ];
    let right = Matrix3D::try_from_grid(&grid)?;
    log::info!("fill: {}, scalar: {}", args.fill, args.scalar);

    println!("left + right = {}", left + right);
    println!("left - right = {}", left - right);
    println!("left * right = {}", left * right);
    println!("right * left = {}", right * left);
    println!("left * {} = {}", args.scalar, left * args.scalar);
    println!("left / {} = {}", args.scalar, left / args.scalar);
    println!("column 1 of right: {}", right.col(1)?);

    // out of range access is reported, not fatal
    if let Err(e) = right.col(3) {
        println!("column 3 of right: {e}");
    }

    if args.vectors {
        let v = Vector3D::new(3.0, 4.0, 0.0);
        println!("v = {v}, |v| = {}", v.magnitude());
        println!("normalize(v) = {}", v.normalize());
        println!("normalize(0) = {}", Vector3D::ZERO.normalize());
        println!("right * v = {}", right * v);
        println!("v * {} = {}", args.scalar, v * args.scalar);
    }

    Ok(())
}
