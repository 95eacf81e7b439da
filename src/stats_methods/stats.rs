//all the methods of calculating averages and variances over repeated runs

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MyVariance
{
    pub mean: f64,
    pub var: f64
}

impl MyVariance{

    pub fn mean(&self) -> f64
    {
        self.mean
    }

    pub fn variance(&self) -> f64
    {
        self.var
    }

    /// `frac` rescales the values, e.g. by the system size to get fractions.
    /// An empty slice gives NaN for both.
    pub fn from_slice(slice: &[usize], frac: Option<f64>) -> Self
    {
        let mean = calc_average(slice, frac);
        let var = calc_variance(slice, mean, frac);
        Self{
            mean,
            var
        }
    }
}

pub fn calc_average(slice: &[usize], frac: Option<f64>) -> f64
{
    if slice.is_empty(){
        return f64::NAN;
    }
    let mut sum = 0_u64;
    for val in slice
    {
        sum += *val as u64;
    }

    let len = slice.len() as u64;
    let rest = sum % len;
    let div = sum / len;

    let res = div as f64 + (rest as f64) / (len as f64);
    match frac{
        None => res,
        Some(f) => res / f
    }
}

pub fn calc_variance(slice: &[usize], average: f64, frac: Option<f64>) -> f64
{
    if slice.is_empty(){
        return f64::NAN;
    }
    let scale = frac.unwrap_or(1.0);
    let var_sum: f64 = slice.iter()
        .map(
            |&val|
            {
                let dif = average - val as f64 / scale;
                dif * dif
            }
        ).sum();

    var_sum / slice.len() as f64
}

/// Mean over the defined values and how many there were
pub fn defined_average(values: &[Option<f64>]) -> (Option<f64>, usize)
{
    let (sum, count) = values.iter()
        .flatten()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        (None, 0)
    } else {
        (Some(sum / count as f64), count)
    }
}
