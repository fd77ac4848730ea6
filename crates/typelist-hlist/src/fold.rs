use crate::{HCons, HList, HNil};

/// Left fold over the elements, front to back.
pub trait HFold<F, Acc>: HList {
    fn hlist_fold(self, acc: Acc, folder: F) -> Acc {
        self.fold_from(Self::LEN, acc, folder)
    }

    #[doc(hidden)]
    fn fold_from(self, total_len: usize, acc: Acc, folder: F) -> Acc;
}

pub trait HFolder<Acc, In> {
    /// `index` is the position of `input` in the folded list.
    fn apply(&mut self, acc: Acc, index: usize, input: In) -> Acc;
}

impl<F, Acc> HFold<F, Acc> for HNil {
    fn fold_from(self, _total_len: usize, acc: Acc, _folder: F) -> Acc {
        acc
    }
}

impl<F, Acc, H, T> HFold<F, Acc> for HCons<H, T>
where
    F: HFolder<Acc, H>,
    T: HFold<F, Acc>,
{
    fn fold_from(self, total_len: usize, acc: Acc, mut folder: F) -> Acc {
        let HCons(head, tail) = self;
        let acc = folder.apply(acc, total_len - Self::LEN, head);
        tail.fold_from(total_len, acc, folder)
    }
}
