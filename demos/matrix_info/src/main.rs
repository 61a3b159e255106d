use argh::FromArgs;
use dom_matrix::DomMatrix;

#[derive(FromArgs)]
/// Build a matrix from 0, 6 or 16 values, transform it and print the result.
/// Use `--` before the values when some of them are negative.
struct Args {
    /// translation as `x,y` or `x,y,z`
    #[argh(option, short = 't')]
    translate: Option<String>,

    /// scale factors as `sx` or `sx,sy`
    #[argh(option, short = 's')]
    scale: Option<String>,

    /// the matrix values: 6 affine coefficients or 16 cells in row-major order
    #[argh(positional)]
    values: Vec<f64>,
}

fn parse_list(list: &str) -> Result<Vec<f64>, std::num::ParseFloatError> {
    list.split(',').map(|v| v.trim().parse::<f64>()).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut matrix = if args.values.is_empty() {
        DomMatrix::new()
    } else {
        DomMatrix::from_slice(&args.values)?
    };
    log::info!("input matrix: {matrix}");

    if let Some(translate) = args.translate.as_deref() {
        matrix = match parse_list(translate)?.as_slice() {
            [x, y] => matrix.translate(*x, *y),
            [x, y, z] => matrix.translate_3d(*x, *y, *z),
            other => {
                let msg = format!("expected 2 or 3 translation values, got {}", other.len());
                return Err(msg.into());
            }
        };
    }

    if let Some(scale) = args.scale.as_deref() {
        matrix = match parse_list(scale)?.as_slice() {
            [s] => matrix.scale_uniform(*s),
            [sx, sy] => matrix.scale(*sx, *sy),
            other => {
                let msg = format!("expected 1 or 2 scale values, got {}", other.len());
                return Err(msg.into());
            }
        };
    }

    println!("{matrix}");
    println!("is_2d: {}", matrix.is_2d());
    println!("is_identity: {}", matrix.is_identity());
    println!("float64: {:?}", matrix.to_float64_array());

    Ok(())
}
