use gradlin::{
    check_gradient, cost, descent_direction, feature_normalize, grad, metrics, normal_equation,
    predict, Dataset, GradientDescent, Vector,
};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Gradient Descent vs Normal Equation ===\n");

    // y = 4 + 3*x1 - 2*x2 + noise
    let dataset = Dataset::synthetic_linear(100, &array![3.0, -2.0], 4.0, 0.1, 2024)?;
    let (features, mu, sigma) = feature_normalize(&dataset.features);
    let x = gradlin::add_bias_column(&features);
    let y = &dataset.labels;

    println!("Training data: {} samples, {} features", dataset.n_samples(), dataset.n_features());
    println!("Normalized with mu = {:.4}, sigma = {:.4}\n", mu, sigma);

    // Validate the analytic gradient before trusting it
    let probe = Vector::from_elem(x.ncols(), 0.5);
    let report = check_gradient(|t| cost(&x, y, t), &grad(&x, y, &probe), &probe, 1e-4);
    println!("Gradient check relative difference: {:e}", report.relative_diff);
    if !report.passes(1e-7) {
        return Err("analytic gradient does not match numerical estimate".into());
    }

    let optimizer = GradientDescent::new().learning_rate(0.1).iterations(1500);
    let initial_theta = Vector::zeros(x.ncols());
    let (theta, history) = optimizer.optimize_with_history(
        &x,
        y,
        descent_direction,
        |t| cost(&x, y, t),
        &initial_theta,
    );

    println!("\nCost history:");
    for (i, c) in history.iter().enumerate().step_by(300) {
        println!("  iteration {:>5}: {:.6}", i + 1, c);
    }

    let closed_form = normal_equation(&x, y)?;
    println!("\nGradient descent theta: {:.4}", theta);
    println!("Normal equation theta:  {:.4}", closed_form);

    let predictions = predict(&x, &theta);
    println!("\nR² score: {:.4}", metrics::r2_score(y, &predictions)?);
    println!("MSE: {:.6}", metrics::mean_squared_error(y, &predictions)?);

    Ok(())
}
