//! Tabular rendering of a response model
//!
//! One magnitude/phase table per channel, rows sorted by ascending
//! frequency (the stored grid is already sorted).

use std::fmt;

use super::core::Frd;

impl fmt::Display for Frd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frequency response data")?;

        let mimo = self.inputs() > 1 || self.outputs() > 1;
        for j in 0..self.inputs() {
            for i in 0..self.outputs() {
                if mimo {
                    writeln!(f, "Input {} to output {}:", j + 1, i + 1)?;
                }
                writeln!(f, "Freq [rad/s]    Magnitude    Phase [rad]")?;
                writeln!(f, "------------  -----------  -----------")?;
                for k in 0..self.nfreq() {
                    let g = self.response()[[i, j, k]];
                    writeln!(
                        f,
                        "{:12.3}  {:11.4e}  {:11.4}",
                        self.omega()[k],
                        g.norm(),
                        g.arg()
                    )?;
                }
            }
        }
        Ok(())
    }
}
