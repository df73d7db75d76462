//! Erlang-C queueing formulas.
//!
//! This module provides the closed-form metrics for an M/M/N queue with a
//! fixed number of agents: probability of waiting, service level and
//! average speed of answer.

/// Returns the probability that an arriving call has to wait.
///
/// The result is a fraction in `0..=1`. When `agents` does not exceed
/// `traffic_intensity` the queue is unstable and the call waits with
/// certainty, so exactly `1.0` is returned.
///
/// With `sum = Σ A^i/i!` for `i < agents` and `numerator = A^agents/agents!`,
/// the result is `numerator / (sum + numerator * agents / (agents - A))`.
/// The ratio `numerator / sum` is built with the Erlang-B recurrence rather
/// than factorials, so it stays finite for agent counts in the hundreds.
/// The recurrence starts about `10 * sqrt(A)` terms below the traffic
/// intensity, so the cost grows with the square root of the load rather
/// than with the agent count.
///
/// # Arguments
///
/// * `agents` - The number of agents answering calls
/// * `traffic_intensity` - The offered load in Erlangs
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::erlang_c_probability_of_wait;
///
/// assert_eq!(erlang_c_probability_of_wait(5, 5.0), 1.0);
/// assert_eq!(erlang_c_probability_of_wait(3, 0.0), 0.0);
///
/// let pw = erlang_c_probability_of_wait(18, 100.0 * 5.0 / 30.0);
/// assert!((pw - 0.049484663).abs() < 1e-6);
/// ```
pub fn erlang_c_probability_of_wait(agents: u32, traffic_intensity: f64) -> f64 {
    let n = f64::from(agents);
    if n <= traffic_intensity {
        return 1.0;
    }

    let blocking = erlang_b(agents, traffic_intensity);

    // numerator / sum, where sum stops one term short of the numerator
    let ratio = blocking / (1.0 - blocking);
    ratio / (1.0 + ratio * n / (n - traffic_intensity))
}

/// Erlang-B blocking `(A^n/n!) / Σ_{k<=n} A^k/k!` for `agents > A`.
///
/// In inverse form the recurrence is `1/B_i = 1 + (i/A) / B_{i-1}`, so an
/// error in a starting term is scaled by `Π i/A`. Below the traffic
/// intensity that product falls like `exp(-w²/2A)` over a window of `w`
/// terms, and a window of `10 * sqrt(A)` drives it under `f64` precision.
fn erlang_b(agents: u32, traffic_intensity: f64) -> f64 {
    let window = 10.0 * traffic_intensity.sqrt() + 10.0;
    // saturating cast; agents > A keeps start below agents
    let start = ((traffic_intensity - window).floor().max(0.0) as u32).min(agents);

    let mut blocking = 1.0;
    for i in start + 1..=agents {
        let offered = traffic_intensity * blocking;
        blocking = offered / (f64::from(i) + offered);
    }
    blocking
}

/// Returns the fraction of calls answered within the target answer time.
///
/// `1 - Pw * exp(-(agents - A) * target_answer_time / average_handle_time)`.
/// The answer time (seconds) is divided by the handle time (minutes)
/// without conversion.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::service_level;
///
/// // No traffic: every call is answered immediately.
/// assert_eq!(service_level(1, 0.0, 20.0, 5.0), 1.0);
///
/// // Unstable queue: nothing is answered in time.
/// assert_eq!(service_level(4, 4.0, 20.0, 5.0), 0.0);
/// ```
pub fn service_level(
    agents: u32,
    traffic_intensity: f64,
    target_answer_time: f64,
    average_handle_time: f64,
) -> f64 {
    let pw = erlang_c_probability_of_wait(agents, traffic_intensity);
    let headroom = f64::from(agents) - traffic_intensity;
    1.0 - pw * (-headroom * target_answer_time / average_handle_time).exp()
}

/// Returns the expected wait of a queued call, in handle time units.
///
/// `Pw * average_handle_time / (agents - A)`. When `agents` does not exceed
/// `traffic_intensity` waits grow without bound and `f64::INFINITY` is
/// returned.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::average_speed_of_answer;
///
/// assert_eq!(average_speed_of_answer(6, 6.0, 3.0), f64::INFINITY);
/// assert_eq!(average_speed_of_answer(2, 0.0, 3.0), 0.0);
/// ```
pub fn average_speed_of_answer(
    agents: u32,
    traffic_intensity: f64,
    average_handle_time: f64,
) -> f64 {
    let n = f64::from(agents);
    if n <= traffic_intensity {
        return f64::INFINITY;
    }
    erlang_c_probability_of_wait(agents, traffic_intensity) * average_handle_time
        / (n - traffic_intensity)
}

/// Returns agent utilisation as a percentage.
///
/// Zero agents report zero occupancy rather than dividing by zero.
pub fn occupancy(agents: u32, traffic_intensity: f64) -> f64 {
    if agents == 0 {
        return 0.0;
    }
    traffic_intensity / f64::from(agents) * 100.0
}
