mod interactor;
