//! The Vivaldi update rule.
//!
//! A pure function of one node's state and one RTT sample. All state lives
//! with the caller; successive calls are independent and order matters only
//! through the caller's sequencing.

use meridian_coords::Coordinate;
use rand::Rng;

use crate::{Error, Result, RttSample};

/// Unit vector pointing from `y` toward `x`.
///
/// When the two points coincide there is no defined direction, so a random
/// unit vector is substituted. That tie-break is what lets a population that
/// starts at a single point spread out at all.
pub fn direction<P, R>(x: P, y: P, rng: &mut R) -> P
where
    P: Coordinate,
    R: Rng + ?Sized,
{
    let d = x - y;
    let norm = d.norm();
    if norm == 0.0 {
        return P::random_unit_vector(rng);
    }
    d / norm
}

/// Apply one Vivaldi update.
///
/// Given the node's current position `x`, its local error, the peer's error
/// as reported by the caller, and one RTT sample, returns the new position
/// and new local error:
///
/// - confidence weight `w = e_local / (e_local + e_remote)`: the less a node
///   trusts itself relative to the peer, the further it moves;
/// - relative sample error `(‖x − y‖ − rtt) / rtt` feeds an exponential
///   moving average of the local error at rate `ce * w`;
/// - the position relaxes along the spring: `x + (rtt − ‖x − y‖) * cc * w`
///   in the direction from the peer toward this node.
///
/// # Errors
///
/// [`Error::NonPositiveRtt`] if the sample's RTT is not strictly positive;
/// [`Error::ZeroConfidence`] if the two error terms sum to exactly zero.
pub fn vivaldi_step<P, R>(
    x: P,
    sample: &RttSample<P>,
    local_error: f64,
    remote_error: f64,
    cc: f64,
    ce: f64,
    rng: &mut R,
) -> Result<(P, f64)>
where
    P: Coordinate,
    R: Rng + ?Sized,
{
    let y = sample.coord;
    let rtt = sample.rtt;

    if rtt <= 0.0 {
        return Err(Error::NonPositiveRtt {
            peer: sample.peer,
            rtt,
        });
    }

    let confidence_mass = local_error + remote_error;
    if confidence_mass == 0.0 {
        return Err(Error::ZeroConfidence {
            local: local_error,
            remote: remote_error,
        });
    }

    // Sample weight
    let w = local_error / confidence_mass;

    // Relative error of this sample
    let distance = (x - y).norm();
    let sample_error = (distance - rtt) / rtt;

    // Update the weighted moving average of the local error
    let new_local_error = sample_error * ce * w + local_error * (1.0 - ce * w);

    // Relax the position along the spring
    let new_x = x + direction(x, y, rng) * (cc * w * (rtt - distance));

    Ok((new_x, new_local_error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_coords::Euclidean2D;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn direction_has_unit_norm_even_for_coincident_points() {
        let mut rng = make_rng();
        let p = Euclidean2D::new(5.0, -3.0);
        let d = direction(p, p, &mut rng);
        assert!((d.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn direction_points_from_peer_toward_node() {
        let mut rng = make_rng();
        let x = Euclidean2D::new(10.0, 0.0);
        let y = Euclidean2D::new(4.0, 0.0);
        let d = direction(x, y, &mut rng);
        assert_eq!(d, Euclidean2D::new(1.0, 0.0));
    }

    #[test]
    fn perfect_prediction_does_not_move_the_node() {
        // Predicted distance equals the measured RTT and both errors agree,
        // so the sample error is zero and the position stays put.
        let mut rng = make_rng();
        let x = Euclidean2D::new(3.0, 4.0);
        let sample = RttSample::new(1, Euclidean2D::ORIGIN, 5.0);
        let (new_x, new_err) = vivaldi_step(x, &sample, 1.0, 1.0, 0.25, 0.25, &mut rng)
            .expect("valid sample");

        assert_eq!(new_x, x);
        // w = 0.5, ce * w = 0.125: the error still decays toward the
        // (zero) sample error.
        assert!((new_err - 0.875).abs() < 1e-12);
    }

    #[test]
    fn long_prediction_pulls_node_toward_peer() {
        let mut rng = make_rng();
        // Predicted 10, measured 6: overshoot, pull toward the peer.
        let x = Euclidean2D::new(10.0, 0.0);
        let sample = RttSample::new(1, Euclidean2D::ORIGIN, 6.0);
        let (new_x, _) = vivaldi_step(x, &sample, 1.0, 1.0, 0.25, 0.25, &mut rng)
            .expect("valid sample");

        // delta = cc * w * (rtt - dist) = 0.25 * 0.5 * -4 = -0.5 along +x
        assert!((new_x.x - 9.5).abs() < 1e-12);
        assert_eq!(new_x.y, 0.0);
    }

    #[test]
    fn short_prediction_pushes_node_away() {
        let mut rng = make_rng();
        let x = Euclidean2D::new(10.0, 0.0);
        let sample = RttSample::new(1, Euclidean2D::ORIGIN, 14.0);
        let (new_x, _) = vivaldi_step(x, &sample, 1.0, 1.0, 0.25, 0.25, &mut rng)
            .expect("valid sample");

        assert!((new_x.x - 10.5).abs() < 1e-12);
    }

    #[test]
    fn error_update_is_an_ema_of_the_sample_error() {
        let mut rng = make_rng();
        // Predicted 10, measured 5: sample error = (10 - 5) / 5 = 1.0.
        let x = Euclidean2D::new(10.0, 0.0);
        let sample = RttSample::new(1, Euclidean2D::ORIGIN, 5.0);
        let (_, new_err) = vivaldi_step(x, &sample, 0.6, 0.2, 0.25, 0.25, &mut rng)
            .expect("valid sample");

        let w = 0.6 / 0.8;
        let expected = 1.0 * 0.25 * w + 0.6 * (1.0 - 0.25 * w);
        assert!((new_err - expected).abs() < 1e-12);
    }

    #[test]
    fn non_positive_rtt_is_rejected() {
        let mut rng = make_rng();
        let x = Euclidean2D::new(1.0, 1.0);
        let sample = RttSample::new(3, Euclidean2D::ORIGIN, 0.0);
        let err = vivaldi_step(x, &sample, 1.0, 1.0, 0.25, 0.25, &mut rng).unwrap_err();
        assert_eq!(err, Error::NonPositiveRtt { peer: 3, rtt: 0.0 });
    }

    #[test]
    fn zero_confidence_mass_is_rejected() {
        let mut rng = make_rng();
        let x = Euclidean2D::new(1.0, 1.0);
        let sample = RttSample::new(0, Euclidean2D::ORIGIN, 10.0);
        let err = vivaldi_step(x, &sample, 0.0, 0.0, 0.25, 0.25, &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::ZeroConfidence {
                local: 0.0,
                remote: 0.0
            }
        );
    }
}
