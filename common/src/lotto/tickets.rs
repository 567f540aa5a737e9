use crate::lotto::ticket::Ticket;

/// Every ticket a player holds, in purchase order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tickets {
    tickets: Vec<Ticket>,
}

impl Tickets {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ticket> {
        self.tickets.iter()
    }

    /// Returns a new collection: `self` first, then `other`.
    pub fn append(&self, other: &Tickets) -> Tickets {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl FromIterator<Ticket> for Tickets {
    fn from_iter<T: IntoIterator<Item = Ticket>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Tickets {
    type Item = &'a Ticket;
    type IntoIter = std::slice::Iter<'a, Ticket>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(start: u8) -> Ticket {
        let values: Vec<u8> = (start..start + 6).collect();
        Ticket::from_values(&values).unwrap()
    }

    #[test]
    fn empty_collection_is_legal() {
        let tickets = Tickets::new(Vec::new());
        assert!(tickets.is_empty());
        assert_eq!(tickets.len(), 0);
        assert_eq!(tickets.iter().count(), 0);
    }

    #[test]
    fn append_keeps_existing_tickets_first() {
        let manual = Tickets::new(vec![ticket(1), ticket(2)]);
        let auto = Tickets::new(vec![ticket(30)]);

        let merged = manual.append(&auto);

        assert_eq!(merged.len(), 3);
        let order: Vec<&Ticket> = merged.iter().collect();
        assert_eq!(order, vec![&ticket(1), &ticket(2), &ticket(30)]);
        assert_eq!(manual.len(), 2, "append must not modify the receiver");
    }

    #[test]
    fn iteration_is_restartable() {
        let tickets: Tickets = (1..=3).map(ticket).collect();
        let first: Vec<&Ticket> = tickets.iter().collect();
        let second: Vec<&Ticket> = (&tickets).into_iter().collect();
        assert_eq!(first, second);
    }
}
