//! Instrumented values for observing how arguments reach a constructor.
//!
//! A [`Probe`] counts its clones and drops in a shared [`ProbeStats`].
//! [`Recorded`] can be constructed from a probe handed over by value, by
//! shared reference or by mutable reference, and remembers which it was.

use std::{convert::Infallible, rc::Rc};

use crate::{construct::Construct, util::counter::Counter};

#[derive(Debug, Default)]
pub struct ProbeStats {
    clones: Counter,
    drops: Counter,
}

impl ProbeStats {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn clones(&self) -> usize {
        self.clones.get()
    }

    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

#[derive(Debug)]
pub struct Probe {
    id: u32,
    visits: u32,
    stats: Rc<ProbeStats>,
}

impl Probe {
    pub fn new(id: u32, stats: &Rc<ProbeStats>) -> Self {
        Probe {
            id,
            visits: 0,
            stats: stats.clone(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// How many times a constructor has written through a `&mut` to this probe.
    pub fn visits(&self) -> u32 {
        self.visits
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        self.stats.clones.increment();
        Probe {
            id: self.id,
            visits: self.visits,
            stats: self.stats.clone(),
        }
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.stats.drops.increment();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handoff {
    /// The probe was handed over by value and taken without copying.
    Moved,
    /// The probe was only readable, so the constructor copied it.
    Copied,
    /// The probe was handed over by mutable reference and updated in place.
    Visited,
}

#[derive(Debug)]
pub struct Recorded {
    id: u32,
    handoff: Handoff,
    // Keeps the probe alive when it was moved or copied in.
    _probe: Option<Probe>,
}

impl Recorded {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn handoff(&self) -> Handoff {
        self.handoff
    }
}

impl Construct<(Probe,)> for Recorded {
    type Error = Infallible;

    fn construct((probe,): (Probe,)) -> Result<Self, Self::Error> {
        Ok(Recorded {
            id: probe.id,
            handoff: Handoff::Moved,
            _probe: Some(probe),
        })
    }
}

impl<'a> Construct<(&'a Probe,)> for Recorded {
    type Error = Infallible;

    fn construct((probe,): (&'a Probe,)) -> Result<Self, Self::Error> {
        Ok(Recorded {
            id: probe.id,
            handoff: Handoff::Copied,
            _probe: Some(probe.clone()),
        })
    }
}

impl<'a> Construct<(&'a mut Probe,)> for Recorded {
    type Error = Infallible;

    fn construct((probe,): (&'a mut Probe,)) -> Result<Self, Self::Error> {
        probe.visits += 1;
        Ok(Recorded {
            id: probe.id,
            handoff: Handoff::Visited,
            _probe: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_and_drop_are_counted() {
        let stats = ProbeStats::shared();
        let probe = Probe::new(1, &stats);
        let copy = probe.clone();
        assert_eq!(stats.clones(), 1);
        drop(copy);
        drop(probe);
        assert_eq!(stats.drops(), 2);
    }

    #[test]
    fn moving_into_record_does_not_copy() {
        let stats = ProbeStats::shared();
        let record = Recorded::construct((Probe::new(5, &stats),)).unwrap();
        assert_eq!(record.handoff(), Handoff::Moved);
        assert_eq!(stats.clones(), 0);
        assert_eq!(stats.drops(), 0);
        drop(record);
        assert_eq!(stats.drops(), 1);
    }
}
